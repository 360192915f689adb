use crate::core::stocks::Stocks;
use serde::{Deserialize, Serialize};

/// Result of a bank-credit operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BankCreditOutcome {
    /// The snapshot after the operation.
    pub stocks: Stocks,
    /// The loan/deposit delta actually applied after clamping.
    pub delta_applied: f64,
}

/// Expand or contract commercial-bank balance sheets by `delta`.
///
/// Horizontal money creation: a loan and its matching deposit are
/// created (or destroyed) together, so private-sector net financial
/// assets are unchanged by construction. A negative `delta` is a net
/// repayment and its magnitude is clamped to `min(loans, deposits)` so
/// neither stock goes negative.
///
/// # Examples
///
/// ```
/// use sfc_engine::core::stocks::Stocks;
/// use sfc_engine::ops::bank_credit::apply_bank_credit;
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
/// let outcome = apply_bank_credit(stocks, 200.0);
/// assert_eq!(outcome.stocks.loans, 3700.0);
/// assert_eq!(outcome.stocks.deposits, 4200.0);
/// ```
pub fn apply_bank_credit(stocks: Stocks, delta: f64) -> BankCreditOutcome {
    let delta_applied = if delta < 0.0 {
        delta.max(-stocks.max_loan_repayment())
    } else {
        delta
    };

    BankCreditOutcome {
        delta_applied,
        stocks: Stocks {
            loans: stocks.loans + delta_applied,
            deposits: stocks.deposits + delta_applied,
            ..stocks
        },
    }
}
