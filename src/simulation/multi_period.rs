use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound on period inflation (1%).
pub const DEFAULT_INFLATION_FLOOR: f64 = 0.01;

fn default_inflation_floor() -> f64 {
    DEFAULT_INFLATION_FLOOR
}

/// Errors arising from simulation configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("simulation must cover at least one period")]
    NoPeriods,
    #[error("initial GDP must be positive, got {0}")]
    NonPositiveGdp(f64),
    #[error("initial {name} must be non-negative, got {value}")]
    NegativeStock { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Immutable input to the multi-period simulator.
///
/// # Examples
///
/// ```
/// use sfc_engine::simulation::multi_period::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.num_periods, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of periods to unroll beyond the initial condition.
    pub num_periods: usize,
    /// Nominal GDP at period 0.
    pub initial_gdp: f64,
    /// Total government debt at period 0 (reserves + all bonds).
    pub initial_debt: f64,
    /// Reserve stock at period 0.
    pub initial_reserves: f64,
    /// Household bond holdings, fixed for the entire run.
    pub initial_bonds_hh: f64,
    /// Primary balance per period: spend minus tax, excluding interest.
    pub primary_balance: f64,
    /// Interest rate paid on reserves and household bonds.
    pub interest_rate: f64,
    /// How strongly the nominal deficit (as a share of GDP) passes
    /// through into inflation.
    pub inflation_elasticity: f64,
    /// Lower bound on period inflation.
    #[serde(default = "default_inflation_floor")]
    pub inflation_floor: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_periods: 10,
            initial_gdp: 25_000.0,
            initial_debt: 30_000.0,
            initial_reserves: 3_000.0,
            initial_bonds_hh: 20_000.0,
            primary_balance: 0.0,
            interest_rate: 0.05,
            inflation_elasticity: 0.5,
            inflation_floor: DEFAULT_INFLATION_FLOOR,
        }
    }
}

impl SimulationConfig {
    /// Baseline scenario: rates held at 5%.
    pub fn rate_hike() -> Self {
        Self::default()
    }

    /// Rate-cut scenario: the policy rate drops to 1%.
    pub fn rate_cut() -> Self {
        Self {
            interest_rate: 0.01,
            ..Self::default()
        }
    }

    /// High-debt scenario: 7% rates, stronger inflation pass-through,
    /// and a 160% debt/GDP starting point.
    pub fn extreme_debt() -> Self {
        Self {
            interest_rate: 0.07,
            inflation_elasticity: 0.6,
            initial_debt: 40_000.0,
            ..Self::default()
        }
    }

    /// Check the configuration before running.
    ///
    /// The simulator itself is total over its numeric domain; filtering
    /// bad input is the caller's job, and this is the filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_periods == 0 {
            return Err(ConfigError::NoPeriods);
        }
        if !self.initial_gdp.is_finite() || self.initial_gdp <= 0.0 {
            return Err(ConfigError::NonPositiveGdp(self.initial_gdp));
        }
        for (name, value) in [
            ("debt", self.initial_debt),
            ("reserves", self.initial_reserves),
            ("household bonds", self.initial_bonds_hh),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeStock { name, value });
            }
        }
        for (name, value) in [
            ("primary balance", self.primary_balance),
            ("interest rate", self.interest_rate),
            ("inflation elasticity", self.inflation_elasticity),
            ("inflation floor", self.inflation_floor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

/// One period of the simulated trajectory.
///
/// Period 0 is the initial condition: stock fields carry the configured
/// starting values and all flow fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Period index, 0-based.
    pub period: usize,
    /// Reserve stock at the end of the period.
    pub reserves: f64,
    /// Household bond holdings (constant across the run).
    pub bonds_households: f64,
    /// Central-bank bond holdings (constant across the run).
    pub bonds_cb: f64,
    /// Total debt: reserves plus all bonds.
    pub total_debt: f64,
    /// Nominal GDP at the end of the period.
    pub nominal_gdp: f64,
    /// Debt-to-GDP ratio at the end of the period.
    pub debt_gdp_ratio: f64,
    /// Interest paid this period on the previous period's interest-bearing stocks.
    pub interest_payments: f64,
    /// Primary balance plus interest payments.
    pub nominal_deficit: f64,
    /// Period inflation rate.
    pub inflation: f64,
    /// Nominal deficit minus the inflation erosion of outstanding debt.
    pub real_deficit: f64,
}

/// Unroll the interest/inflation/debt recurrence over discrete periods.
///
/// Returns `config.num_periods + 1` records; index 0 is the initial
/// condition. Household bonds are fixed for the run and the central
/// bank's holdings are the remainder
/// `max(0, initial_debt - initial_reserves - initial_bonds_hh)`.
///
/// For each period `t >= 1`, using the previous period's stocks:
/// interest accrues on reserves and household bonds, the nominal deficit
/// is the primary balance plus that interest, inflation is the floored
/// pass-through of the deficit-to-GDP ratio, and the deficit accumulates
/// into reserves while GDP compounds by inflation. The real deficit
/// subtracts the inflation erosion of the previous debt stock — the
/// channel through which a large enough pass-through makes higher rates
/// shrink the real debt burden.
///
/// Pure fold: no state outside the returned records, deterministic for
/// identical configs.
pub fn run_multi_period_simulation(config: &SimulationConfig) -> Vec<PeriodRecord> {
    let bonds_hh = config.initial_bonds_hh;
    let bonds_cb = (config.initial_debt - config.initial_reserves - bonds_hh).max(0.0);

    let mut reserves = config.initial_reserves;
    let mut nominal_gdp = config.initial_gdp;

    let mut results = Vec::with_capacity(config.num_periods + 1);
    results.push(PeriodRecord {
        period: 0,
        reserves,
        bonds_households: bonds_hh,
        bonds_cb,
        total_debt: reserves + bonds_hh + bonds_cb,
        nominal_gdp,
        debt_gdp_ratio: (reserves + bonds_hh + bonds_cb) / nominal_gdp,
        interest_payments: 0.0,
        nominal_deficit: 0.0,
        inflation: 0.0,
        real_deficit: 0.0,
    });

    for t in 1..=config.num_periods {
        let total_debt_prev = reserves + bonds_hh + bonds_cb;
        let interest_payments = config.interest_rate * (reserves + bonds_hh);
        let nominal_deficit = config.primary_balance + interest_payments;
        let inflation = (config.inflation_elasticity * (nominal_deficit / nominal_gdp))
            .max(config.inflation_floor);
        let real_deficit = nominal_deficit - inflation * total_debt_prev;

        reserves += nominal_deficit;
        nominal_gdp *= 1.0 + inflation;

        let total_debt = reserves + bonds_hh + bonds_cb;
        results.push(PeriodRecord {
            period: t,
            reserves,
            bonds_households: bonds_hh,
            bonds_cb,
            total_debt,
            nominal_gdp,
            debt_gdp_ratio: total_debt / nominal_gdp,
            interest_payments,
            nominal_deficit,
            inflation,
            real_deficit,
        });
    }

    results
}
