use serde::{Deserialize, Serialize};
use std::fmt;

/// A snapshot of the monetary system's balance-sheet stocks.
///
/// Each field is a single instrument position shared by two sectors:
/// every entry is simultaneously an asset on one balance sheet and a
/// liability on another, so the four sectors (households, commercial
/// banks, Treasury, central bank) always consolidate to zero net worth.
///
/// The snapshot is a plain value. Operations never mutate it in place;
/// they return a fresh snapshot together with the amounts actually
/// applied, and the caller replaces its copy.
///
/// # Examples
///
/// ```
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
/// assert_eq!(stocks.max_loan_repayment(), 3500.0);
/// assert_eq!(stocks.max_bond_issuance(), 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stocks {
    /// Bank deposit liabilities held by households.
    pub deposits: f64,
    /// Bank loan assets to households.
    pub loans: f64,
    /// Central-bank reserve liabilities held by banks.
    pub reserves: f64,
    /// Government bonds held by households.
    pub bonds_households: f64,
    /// Government bonds held by the central bank.
    pub bonds_cb: f64,
    /// The Treasury general account: Treasury's cash at the central bank.
    pub tga: f64,
}

impl Stocks {
    /// Largest net loan repayment the system can absorb.
    ///
    /// Repayment destroys a loan and a deposit together, so it is capped
    /// by whichever stock runs out first.
    pub fn max_loan_repayment(&self) -> f64 {
        self.loans.min(self.deposits)
    }

    /// Largest bond issuance the private sector can fund.
    ///
    /// Issuance drains deposits and reserves in lockstep.
    pub fn max_bond_issuance(&self) -> f64 {
        self.deposits.min(self.reserves)
    }

    /// Largest QE purchase possible: the central bank cannot buy more
    /// bonds than households hold.
    pub fn max_qe_swap(&self) -> f64 {
        self.bonds_households
    }

    /// Largest QT sale possible, capped by the central bank's bond
    /// portfolio and by the deposits/reserves that fund the purchase.
    pub fn max_qt_swap(&self) -> f64 {
        self.bonds_cb.min(self.deposits).min(self.reserves)
    }

    /// Whether every stock is non-negative.
    ///
    /// Operations clamp their inputs so this holds by construction; the
    /// check exists for tests and stress sweeps.
    pub fn is_non_negative(&self) -> bool {
        self.deposits >= 0.0
            && self.loans >= 0.0
            && self.reserves >= 0.0
            && self.bonds_households >= 0.0
            && self.bonds_cb >= 0.0
            && self.tga >= 0.0
    }
}

impl fmt::Display for Stocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Stocks ===")?;
        writeln!(f, "Deposits:         {:.2}", self.deposits)?;
        writeln!(f, "Loans:            {:.2}", self.loans)?;
        writeln!(f, "Reserves:         {:.2}", self.reserves)?;
        writeln!(f, "Bonds (HH):       {:.2}", self.bonds_households)?;
        writeln!(f, "Bonds (CB):       {:.2}", self.bonds_cb)?;
        writeln!(f, "TGA:              {:.2}", self.tga)?;
        Ok(())
    }
}
