use crate::core::stocks::Stocks;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Solvency metrics derived from a [`Stocks`] snapshot.
///
/// These are pure functions of the snapshot, recomputed on demand and
/// never stored. `identity_gap` is the consolidated net worth of all
/// four sectors; it is zero by construction for every snapshot reachable
/// through the operations, so a materially non-zero gap signals a bug.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Bank assets: loans plus reserves.
    pub bank_assets: f64,
    /// Bank equity: assets minus deposit liabilities.
    pub bank_equity: f64,
    /// Household assets: deposits plus household bond holdings.
    pub household_assets: f64,
    /// Household net worth: assets minus loan liabilities.
    pub household_net_worth: f64,
    /// Treasury net worth: TGA minus all bonds outstanding.
    pub treasury_net_worth: f64,
    /// Central-bank equity: bond portfolio minus reserve and TGA liabilities.
    pub cb_equity: f64,
    /// Consolidated public-sector net worth.
    pub public_net_worth: f64,
    /// Private-sector net financial wealth: reserves plus household bonds.
    pub private_nfw: f64,
    /// `private_nfw + public_net_worth`; must be ≈ 0.
    pub identity_gap: f64,
}

impl DerivedMetrics {
    /// Whether the sectoral balance identity holds to the given tolerance.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.identity_gap.abs() <= tolerance
    }
}

/// Compute the derived solvency metrics for a snapshot.
///
/// Total function: never fails, has no side effects.
///
/// # Examples
///
/// ```
/// use sfc_engine::core::metrics::compute_derived;
/// use sfc_engine::core::stocks::Stocks;
///
/// let stocks = Stocks {
///     deposits: 4000.0,
///     loans: 3500.0,
///     reserves: 800.0,
///     bonds_households: 2600.0,
///     bonds_cb: 500.0,
///     tga: 200.0,
/// };
///
/// let derived = compute_derived(&stocks);
/// assert!(derived.identity_gap.abs() < 1e-10);
/// ```
pub fn compute_derived(stocks: &Stocks) -> DerivedMetrics {
    let bank_assets = stocks.loans + stocks.reserves;
    let bank_equity = bank_assets - stocks.deposits;

    let household_assets = stocks.deposits + stocks.bonds_households;
    let household_net_worth = household_assets - stocks.loans;

    let treasury_liabilities = stocks.bonds_households + stocks.bonds_cb;
    let treasury_net_worth = stocks.tga - treasury_liabilities;

    let cb_liabilities = stocks.reserves + stocks.tga;
    let cb_equity = stocks.bonds_cb - cb_liabilities;

    let public_net_worth = treasury_net_worth + cb_equity;
    let private_nfw = stocks.reserves + stocks.bonds_households;
    let identity_gap = private_nfw + public_net_worth;

    DerivedMetrics {
        bank_assets,
        bank_equity,
        household_assets,
        household_net_worth,
        treasury_net_worth,
        cb_equity,
        public_net_worth,
        private_nfw,
        identity_gap,
    }
}

impl fmt::Display for DerivedMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Derived Metrics ===")?;
        writeln!(f, "Bank equity:          {:.2}", self.bank_equity)?;
        writeln!(f, "Household net worth:  {:.2}", self.household_net_worth)?;
        writeln!(f, "Treasury net worth:   {:.2}", self.treasury_net_worth)?;
        writeln!(f, "CB equity:            {:.2}", self.cb_equity)?;
        writeln!(f, "Public net worth:     {:.2}", self.public_net_worth)?;
        writeln!(f, "Private NFW:          {:.2}", self.private_nfw)?;
        writeln!(f, "Identity gap:         {:.2e}", self.identity_gap)?;
        Ok(())
    }
}
