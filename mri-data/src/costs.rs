use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use mri_core::{ProcedureCostRow, ProcedureCostTable};
use tracing::{debug, warn};

use crate::LoadError;
use crate::reader::{open, parse_code, parse_decimal, records};

/// Loader for the procedure cost table.
///
/// Each line is `code,base_cost,sample_1,...,sample_N` with at least one
/// duration sample (in minutes). Rows may carry different sample counts.
pub struct ProcedureCostLoader;

impl ProcedureCostLoader {
    /// Parse the cost table from any reader.
    ///
    /// Every row is kept, including rows that repeat an earlier code;
    /// lookups resolve to the first one.
    pub fn parse<R: Read>(reader: R) -> Result<ProcedureCostTable, LoadError> {
        let mut table = ProcedureCostTable::new();
        let mut seen = HashSet::new();

        for (line, record) in records(reader, b',')? {
            if record.len() < 2 {
                return Err(LoadError::FieldCount {
                    line,
                    expected: "at least 3".to_string(),
                    found: record.len(),
                });
            }
            let code = parse_code(line, &record[0])?;
            if record.len() < 3 {
                return Err(LoadError::MissingSamples { line, code });
            }
            let base_cost = parse_decimal(line, "base cost", &record[1])?;
            let duration_samples = record
                .iter()
                .skip(2)
                .map(|value| parse_decimal(line, "duration sample", value))
                .collect::<Result<Vec<_>, _>>()?;

            if !seen.insert(code) {
                warn!(line, code, "duplicate cost row; lookups use the first row for this code");
            }
            table.push(ProcedureCostRow {
                code,
                base_cost,
                duration_samples,
            });
        }

        Ok(table)
    }

    pub fn load(path: &Path) -> Result<ProcedureCostTable, LoadError> {
        let table = Self::parse(open(path)?)?;
        debug!(path = %path.display(), rows = table.len(), "loaded procedure cost table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_rows_with_varying_sample_counts() {
        let input = "1,250.0,30,45\n2,1200,60,75,90,105\n";

        let table = ProcedureCostLoader::parse(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        let brain = table.find(1).unwrap();
        assert_eq!(brain.base_cost, dec!(250.0));
        assert_eq!(brain.duration_samples, vec![dec!(30), dec!(45)]);
        assert_eq!(table.find(2).unwrap().duration_samples.len(), 4);
    }

    #[test]
    fn parse_accepts_float_formatted_codes() {
        let table = ProcedureCostLoader::parse("3.0,99.5,20\n".as_bytes()).unwrap();

        assert_eq!(table.find(3).unwrap().base_cost, dec!(99.5));
    }

    #[test]
    fn parse_keeps_duplicate_rows_and_find_returns_first() {
        let input = "1,250.0,30\n1,999.0,90\n";

        let table = ProcedureCostLoader::parse(input.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.find(1).unwrap().base_cost, dec!(250.0));
    }

    #[test]
    fn parse_row_without_samples_is_missing_samples() {
        let input = "1,250.0,30\n2,400.0\n";

        match ProcedureCostLoader::parse(input.as_bytes()).unwrap_err() {
            LoadError::MissingSamples { line, code } => {
                assert_eq!(line, 2);
                assert_eq!(code, 2);
            }
            other => panic!("expected MissingSamples, got {:?}", other),
        }
    }

    #[test]
    fn parse_single_column_is_field_count_error() {
        let result = ProcedureCostLoader::parse("1\n".as_bytes());

        assert!(matches!(
            result,
            Err(LoadError::FieldCount { line: 1, found: 1, .. })
        ));
    }

    #[test]
    fn parse_non_numeric_sample_is_invalid_number() {
        match ProcedureCostLoader::parse("1,250.0,30,long\n".as_bytes()).unwrap_err() {
            LoadError::InvalidNumber { field, value, .. } => {
                assert_eq!(field, "duration sample");
                assert_eq!(value, "long");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn parse_non_numeric_base_cost_is_invalid_number() {
        let result = ProcedureCostLoader::parse("1,cheap,30\n".as_bytes());

        assert!(matches!(
            result,
            Err(LoadError::InvalidNumber {
                field: "base cost",
                ..
            })
        ));
    }
}
