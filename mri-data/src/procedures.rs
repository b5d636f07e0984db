use std::io::Read;
use std::path::Path;

use mri_core::{ProcedureCatalog, ProcedureEntry};
use tracing::{debug, warn};

use crate::LoadError;
use crate::reader::{open, parse_code, records};

/// Loader for the procedure catalog (`code|description` per line).
pub struct ProcedureCatalogLoader;

impl ProcedureCatalogLoader {
    /// Parse the catalog from any reader.
    ///
    /// A repeated code keeps its first position but takes the description
    /// from its last line.
    pub fn parse<R: Read>(reader: R) -> Result<ProcedureCatalog, LoadError> {
        let mut catalog = ProcedureCatalog::new();

        for (line, record) in records(reader, b'|')? {
            if record.len() != 2 {
                return Err(LoadError::FieldCount {
                    line,
                    expected: "2".to_string(),
                    found: record.len(),
                });
            }
            let code = parse_code(line, &record[0])?;
            let description = record[1].to_string();

            if let Some(previous) = catalog.insert(ProcedureEntry { code, description }) {
                warn!(line, code, previous = %previous, "duplicate procedure code; later description wins");
            }
        }

        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<ProcedureCatalog, LoadError> {
        let catalog = Self::parse(open(path)?)?;
        debug!(path = %path.display(), count = catalog.len(), "loaded procedure catalog");
        Ok(catalog)
    }
}
