pub mod calculations;
pub mod models;

pub use calculations::{CostEstimate, EstimateError, Estimator, format_currency};
pub use models::*;
