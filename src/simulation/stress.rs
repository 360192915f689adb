//! Randomized configuration sweeps for invariant stress testing.
//!
//! Generates batches of valid simulation configurations across parameter
//! ranges so tests (and the CLI `sweep` command) can hammer the
//! projection engine with conditions no hand-written fixture covers.

use crate::simulation::multi_period::SimulationConfig;
use rand::Rng;

/// Parameter ranges for a random configuration sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Interest-rate range to sample.
    pub min_interest_rate: f64,
    pub max_interest_rate: f64,
    /// Inflation-elasticity range to sample.
    pub min_elasticity: f64,
    pub max_elasticity: f64,
    /// Initial-debt range to sample.
    pub min_initial_debt: f64,
    pub max_initial_debt: f64,
    /// Periods per run.
    pub num_periods: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_interest_rate: 0.0,
            max_interest_rate: 0.10,
            min_elasticity: 0.0,
            max_elasticity: 1.0,
            min_initial_debt: 23_000.0,
            max_initial_debt: 50_000.0,
            num_periods: 20,
        }
    }
}

/// Generate `count` random simulation configurations within the ranges.
///
/// Stocks other than total debt stay at their baseline values; the
/// central-bank bond remainder absorbs the debt variation. Every
/// generated configuration passes [`SimulationConfig::validate`].
pub fn generate_random_configs(config: &SweepConfig, count: usize) -> Vec<SimulationConfig> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| SimulationConfig {
            num_periods: config.num_periods,
            interest_rate: rng.gen_range(config.min_interest_rate..=config.max_interest_rate),
            inflation_elasticity: rng.gen_range(config.min_elasticity..=config.max_elasticity),
            initial_debt: rng.gen_range(config.min_initial_debt..=config.max_initial_debt),
            ..SimulationConfig::default()
        })
        .collect()
}
