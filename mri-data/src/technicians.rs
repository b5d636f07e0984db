use std::io::Read;
use std::path::Path;

use mri_core::{Technician, TechnicianRoster};
use tracing::{debug, warn};

use crate::LoadError;
use crate::reader::{open, parse_decimal, records};

/// Loader for the technician salary file (`name,salary` per line).
pub struct TechnicianLoader;

impl TechnicianLoader {
    /// Parse technicians from any reader.
    ///
    /// A name that appears twice keeps its first position in the roster but
    /// takes the salary from its last line.
    pub fn parse<R: Read>(reader: R) -> Result<TechnicianRoster, LoadError> {
        let mut roster = TechnicianRoster::new();

        for (line, record) in records(reader, b',')? {
            if record.len() != 2 {
                return Err(LoadError::FieldCount {
                    line,
                    expected: "2".to_string(),
                    found: record.len(),
                });
            }
            let name = record[0].to_string();
            let annual_salary = parse_decimal(line, "salary", &record[1])?;

            if let Some(previous) = roster.insert(Technician {
                name: name.clone(),
                annual_salary,
            }) {
                warn!(
                    line,
                    technician = %name,
                    previous = %previous,
                    salary = %annual_salary,
                    "duplicate technician; later salary replaces earlier one"
                );
            }
        }

        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<TechnicianRoster, LoadError> {
        let roster = Self::parse(open(path)?)?;
        debug!(path = %path.display(), count = roster.len(), "loaded technicians");
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_single_technician() {
        let roster = TechnicianLoader::parse("Alice,85000.0".as_bytes()).unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.salary_of("Alice"), Some(dec!(85000.0)));
    }

    #[test]
    fn parse_keeps_file_order() {
        let input = "Zoe,70000\nAlice,85000.0\nBob,104000\n";

        let roster = TechnicianLoader::parse(input.as_bytes()).unwrap();

        let names: Vec<&str> = roster.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Alice", "Bob"]);
    }

    #[test]
    fn parse_trims_whitespace_and_windows_line_endings() {
        let input = " Alice , 85000.0 \r\nBob,104000\r\n";

        let roster = TechnicianLoader::parse(input.as_bytes()).unwrap();

        assert_eq!(roster.salary_of("Alice"), Some(dec!(85000.0)));
        assert_eq!(roster.salary_of("Bob"), Some(dec!(104000)));
    }

    #[test]
    fn parse_duplicate_name_last_salary_wins() {
        let input = "Alice,85000\nBob,104000\nAlice,90000\n";

        let roster = TechnicianLoader::parse(input.as_bytes()).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.salary_of("Alice"), Some(dec!(90000)));
        assert_eq!(roster.by_position(1).unwrap().name, "Alice");
    }

    #[test]
    fn parse_empty_input_yields_empty_roster() {
        let roster = TechnicianLoader::parse("".as_bytes()).unwrap();

        assert!(roster.is_empty());
    }

    #[test]
    fn parse_missing_delimiter_is_field_count_error() {
        let input = "Alice,85000\nBob 104000\n";

        match TechnicianLoader::parse(input.as_bytes()).unwrap_err() {
            LoadError::FieldCount { line, found, .. } => {
                assert_eq!(line, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected FieldCount, got {:?}", other),
        }
    }

    #[test]
    fn parse_extra_field_is_field_count_error() {
        let result = TechnicianLoader::parse("Alice,85000,extra\n".as_bytes());

        assert!(matches!(
            result,
            Err(LoadError::FieldCount { line: 1, found: 3, .. })
        ));
    }

    #[test]
    fn parse_non_numeric_salary_is_invalid_number() {
        match TechnicianLoader::parse("Alice,lots\n".as_bytes()).unwrap_err() {
            LoadError::InvalidNumber { line, field, value } => {
                assert_eq!(line, 1);
                assert_eq!(field, "salary");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = TechnicianLoader::load(Path::new("does/not/exist.csv"));

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
