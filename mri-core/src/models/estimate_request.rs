use serde::{Deserialize, Serialize};

/// The pair of choices made during one session iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub procedure_code: i64,
    pub technician: String,
}

impl EstimateRequest {
    pub fn new(
        procedure_code: i64,
        technician: impl Into<String>,
    ) -> Self {
        Self {
            procedure_code,
            technician: technician.into(),
        }
    }
}
