//! MRI procedure cost estimation.
//!
//! An estimate is the procedure's fixed base cost plus the technician's labor
//! for the expected exam duration:
//!
//! ```text
//! estimate = base_cost + (annual_salary * average_duration) / (52 * 40 * 60)
//! ```
//!
//! The divisor converts an annual salary into a per-minute labor rate
//! (52 weeks of 40 hours of 60 minutes). No rounding happens here.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mri_core::{
//!     EstimateRequest, Estimator, ProcedureCostRow, ProcedureCostTable, Technician,
//!     TechnicianRoster,
//! };
//!
//! let costs: ProcedureCostTable = [ProcedureCostRow {
//!     code: 1,
//!     base_cost: dec!(250.0),
//!     duration_samples: vec![dec!(30), dec!(45)],
//! }]
//! .into_iter()
//! .collect();
//! let roster: TechnicianRoster = [Technician {
//!     name: "Bob".to_string(),
//!     annual_salary: dec!(104000),
//! }]
//! .into_iter()
//! .collect();
//!
//! let estimator = Estimator::new(&costs, &roster);
//! let estimate = estimator.estimate(&EstimateRequest::new(1, "Bob")).unwrap();
//!
//! assert_eq!(estimate.total, dec!(281.25));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{EstimateRequest, ProcedureCostTable, TechnicianRoster};

pub const WEEKS_PER_YEAR: u32 = 52;
pub const HOURS_PER_WEEK: u32 = 40;
pub const MINUTES_PER_HOUR: u32 = 60;

/// Working minutes in a year (124,800), used to turn an annual salary into a
/// per-minute labor rate.
pub fn minutes_per_work_year() -> Decimal {
    Decimal::from(WEEKS_PER_YEAR * HOURS_PER_WEEK * MINUTES_PER_HOUR)
}

/// Labor cost of `minutes` of work for a technician paid `annual_salary`.
///
/// # Arguments
///
/// * `annual_salary` - The technician's yearly salary
/// * `minutes` - Expected exam duration
///
/// # Returns
///
/// `annual_salary * minutes / 124800`, or `None` if the product overflows
/// [`Decimal`].
pub fn labor_cost(
    annual_salary: Decimal,
    minutes: Decimal,
) -> Option<Decimal> {
    annual_salary
        .checked_mul(minutes)?
        .checked_div(minutes_per_work_year())
}

/// Errors raised when an estimate references data that is not loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// No row in the cost table carries this procedure code.
    #[error("no cost data for procedure code {0}")]
    UnknownProcedure(i64),

    /// The cost row exists but has no duration samples to average.
    #[error("procedure code {0} has no duration samples")]
    NoDurationSamples(i64),

    /// The technician is not in the salary roster.
    #[error("unknown technician '{0}'")]
    UnknownTechnician(String),

    /// The inputs for this procedure are too large to compute exactly.
    #[error("estimate for procedure code {0} is out of numeric range")]
    Overflow(i64),
}

/// Breakdown of a single estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub base_cost: Decimal,

    /// Mean of the procedure's duration samples, in minutes.
    pub average_duration: Decimal,

    pub annual_salary: Decimal,

    /// Technician cost for `average_duration` minutes.
    pub labor_cost: Decimal,

    /// `base_cost + labor_cost`, unrounded.
    pub total: Decimal,
}

/// Combines the cost table and the technician roster into estimates.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    costs: &'a ProcedureCostTable,
    roster: &'a TechnicianRoster,
}

impl<'a> Estimator<'a> {
    pub fn new(
        costs: &'a ProcedureCostTable,
        roster: &'a TechnicianRoster,
    ) -> Self {
        Self { costs, roster }
    }

    /// Estimates the cost of the requested procedure and technician.
    ///
    /// # Errors
    ///
    /// * [`EstimateError::UnknownProcedure`] if no cost row matches the code.
    /// * [`EstimateError::NoDurationSamples`] if the matching row has no samples.
    /// * [`EstimateError::UnknownTechnician`] if the name is not in the roster.
    /// * [`EstimateError::Overflow`] if the arithmetic exceeds [`Decimal`]'s range.
    pub fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> Result<CostEstimate, EstimateError> {
        let code = request.procedure_code;
        let row = self
            .costs
            .find(code)
            .ok_or(EstimateError::UnknownProcedure(code))?;
        if row.duration_samples.is_empty() {
            return Err(EstimateError::NoDurationSamples(code));
        }
        let average_duration = row
            .average_duration()
            .ok_or(EstimateError::Overflow(code))?;
        let annual_salary = self
            .roster
            .salary_of(&request.technician)
            .ok_or_else(|| EstimateError::UnknownTechnician(request.technician.clone()))?;

        let labor_cost =
            labor_cost(annual_salary, average_duration).ok_or(EstimateError::Overflow(code))?;
        let total = row
            .base_cost
            .checked_add(labor_cost)
            .ok_or(EstimateError::Overflow(code))?;

        debug!(
            code,
            technician = %request.technician,
            base_cost = %row.base_cost,
            average_duration = %average_duration,
            labor_cost = %labor_cost,
            total = %total,
            "computed estimate"
        );

        Ok(CostEstimate {
            base_cost: row.base_cost,
            average_duration,
            annual_salary,
            labor_cost,
            total,
        })
    }
}
