//! Loaders for the flat-file reference tables used by the MRI cost calculator.
//!
//! Three files are read once at startup:
//!
//! | File | Delimiter | Layout |
//! |------|-----------|--------|
//! | technician salaries | `,` | `name,salary` |
//! | procedure catalog | `\|` | `code\|description` |
//! | procedure costs | `,` | `code,base_cost,sample_1,...,sample_N` |
//!
//! None of the files has a header row. Blank lines are ignored and every
//! field is trimmed.

mod costs;
mod error;
mod procedures;
mod reader;
mod reference;
mod technicians;

pub use costs::ProcedureCostLoader;
pub use error::LoadError;
pub use procedures::ProcedureCatalogLoader;
pub use reference::{
    DEFAULT_PROCEDURE_COSTS_FILE, DEFAULT_PROCEDURES_FILE, DEFAULT_TECHNICIANS_FILE, DataPaths,
    ReferenceData,
};
pub use technicians::TechnicianLoader;
