//! Cost calculations for MRI procedure estimates.
//!
//! [`common`] holds the numeric helpers shared by the estimator and the
//! presentation layer; [`estimator`] combines a procedure's cost row with a
//! technician's salary.

pub mod common;
pub mod estimator;

pub use common::format_currency;
pub use estimator::{CostEstimate, EstimateError, Estimator};
