//! Multi-period projection of interest, inflation, and debt dynamics.

pub mod multi_period;
pub mod stress;
