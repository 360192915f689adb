//! Ledger operations: the state transitions of the monetary system.
//!
//! Each applier is a pure, total function from a snapshot to a new
//! snapshot plus metadata about what was actually applied. Infeasible
//! requests are clamped to the maximum feasible amount, never rejected;
//! the applied amounts are returned so callers can report the
//! discrepancy. Every applier preserves the sectoral balance identity.

pub mod bank_credit;
pub mod fiscal;
pub mod open_market;
