//! # sfc-engine
//!
//! Stock-flow consistent monetary ledger and multi-period simulation engine.
//!
//! Models a simplified national monetary system as four double-entry
//! balance sheets (households, commercial banks, Treasury, central bank)
//! and exposes state-transition operations that move money between
//! sectors while preserving the accounting identities. Infeasible
//! requests are clamped, never rejected, and the amounts actually
//! applied are always returned.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: the stock snapshot and derived solvency metrics
//! - **ops** — The five ledger operations: bank credit, fiscal policy with TGA targeting, bond issuance, QE, QT
//! - **simulation** — Multi-period interest/inflation/debt projection and randomized stress sweeps
//!
//! The engine holds no state between calls: the caller owns the current
//! snapshot and replaces it with each operation's result.

pub mod core;
pub mod ops;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::metrics::{compute_derived, DerivedMetrics};
    pub use crate::core::stocks::Stocks;
    pub use crate::ops::bank_credit::{apply_bank_credit, BankCreditOutcome};
    pub use crate::ops::fiscal::{
        apply_fiscal, preview_fiscal, FiscalFlows, FiscalOutcome, FiscalPolicy, FiscalPreview,
        DEFAULT_TGA_TARGET,
    };
    pub use crate::ops::open_market::{
        apply_bond_issuance, apply_qe_swap, apply_qt_swap, OpenMarketOutcome,
    };
    pub use crate::simulation::multi_period::{
        run_multi_period_simulation, PeriodRecord, SimulationConfig, DEFAULT_INFLATION_FLOOR,
    };
}
