//! Portfolio-swap operations: bond issuance, QE, and QT.
//!
//! All three reshuffle the composition of private-sector assets without
//! changing private net financial wealth.

use crate::core::stocks::Stocks;
use serde::{Deserialize, Serialize};

/// Result of a bond-market operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpenMarketOutcome {
    /// The snapshot after the operation.
    pub stocks: Stocks,
    /// The amount actually applied after clamping.
    pub amount_applied: f64,
}

/// Issue Treasury bonds to households.
///
/// Drains deposits and reserves by `min(amount, deposits, reserves)` and
/// credits household bond holdings and the TGA by the same amount. In
/// this model bonds count as private-sector net financial assets, so the
/// swap redistributes within `private_nfw` without changing its total.
pub fn apply_bond_issuance(stocks: Stocks, amount: f64) -> OpenMarketOutcome {
    let applied = amount.min(stocks.max_bond_issuance());

    OpenMarketOutcome {
        amount_applied: applied,
        stocks: Stocks {
            bonds_households: stocks.bonds_households + applied,
            deposits: stocks.deposits - applied,
            reserves: stocks.reserves - applied,
            tga: stocks.tga + applied,
            ..stocks
        },
    }
}

/// Quantitative easing: the central bank buys bonds from households.
///
/// Moves `min(amount, bonds_households)` from household holdings into
/// the central-bank portfolio, paying with new reserves that flow
/// through the banking system as deposits.
pub fn apply_qe_swap(stocks: Stocks, amount: f64) -> OpenMarketOutcome {
    let applied = amount.min(stocks.max_qe_swap());

    OpenMarketOutcome {
        amount_applied: applied,
        stocks: Stocks {
            bonds_households: stocks.bonds_households - applied,
            bonds_cb: stocks.bonds_cb + applied,
            deposits: stocks.deposits + applied,
            reserves: stocks.reserves + applied,
            ..stocks
        },
    }
}

/// Quantitative tightening: the exact inverse of [`apply_qe_swap`].
///
/// Clamped to `min(amount, bonds_cb, deposits, reserves)`.
pub fn apply_qt_swap(stocks: Stocks, amount: f64) -> OpenMarketOutcome {
    let applied = amount.min(stocks.max_qt_swap());

    OpenMarketOutcome {
        amount_applied: applied,
        stocks: Stocks {
            bonds_households: stocks.bonds_households + applied,
            bonds_cb: stocks.bonds_cb - applied,
            deposits: stocks.deposits - applied,
            reserves: stocks.reserves - applied,
            ..stocks
        },
    }
}
