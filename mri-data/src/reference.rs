use std::path::{Path, PathBuf};

use mri_core::{ProcedureCatalog, ProcedureCostTable, TechnicianRoster};
use tracing::{info, warn};

use crate::{LoadError, ProcedureCatalogLoader, ProcedureCostLoader, TechnicianLoader};

pub const DEFAULT_PROCEDURE_COSTS_FILE: &str = "mri-proc-data.csv";
pub const DEFAULT_TECHNICIANS_FILE: &str = "technician-salaries.csv";
pub const DEFAULT_PROCEDURES_FILE: &str = "mri-procedures.csv";

/// Locations of the three reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub procedure_costs: PathBuf,
    pub technicians: PathBuf,
    pub procedures: PathBuf,
}

impl DataPaths {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            procedure_costs: dir.join(DEFAULT_PROCEDURE_COSTS_FILE),
            technicians: dir.join(DEFAULT_TECHNICIANS_FILE),
            procedures: dir.join(DEFAULT_PROCEDURES_FILE),
        }
    }
}

/// The immutable tables a session works from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub catalog: ProcedureCatalog,
    pub costs: ProcedureCostTable,
    pub technicians: TechnicianRoster,
}

impl ReferenceData {
    /// Load all three tables. Any failure aborts the whole load.
    pub fn load(paths: &DataPaths) -> Result<Self, LoadError> {
        let data = Self {
            costs: ProcedureCostLoader::load(&paths.procedure_costs)?,
            technicians: TechnicianLoader::load(&paths.technicians)?,
            catalog: ProcedureCatalogLoader::load(&paths.procedures)?,
        };

        let missing = data.codes_without_cost_rows();
        if !missing.is_empty() {
            warn!(?missing, "catalog codes have no cost row; estimating them will fail");
        }
        info!(
            procedures = data.catalog.len(),
            cost_rows = data.costs.len(),
            technicians = data.technicians.len(),
            "reference data loaded"
        );

        Ok(data)
    }

    /// Catalog codes that have no matching row in the cost table.
    pub fn codes_without_cost_rows(&self) -> Vec<i64> {
        self.catalog
            .iter()
            .map(|entry| entry.code)
            .filter(|code| self.costs.find(*code).is_none())
            .collect()
    }
}
