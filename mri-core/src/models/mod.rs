mod estimate_request;
mod procedure;
mod technician;

pub use estimate_request::EstimateRequest;
pub use procedure::{ProcedureCatalog, ProcedureCostRow, ProcedureCostTable, ProcedureEntry};
pub use technician::{Technician, TechnicianRoster};
