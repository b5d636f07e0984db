//! Shared record reading for the headerless reference files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{StringRecord, Trim};
use rust_decimal::Decimal;

use crate::LoadError;

/// Reads every non-blank record from `reader`, paired with its line number.
///
/// Quoting is disabled so quote characters in descriptions are kept verbatim.
pub(crate) fn records<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<(u64, StringRecord)>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quoting(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());
        records.push((line, record));
    }
    Ok(records)
}

pub(crate) fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a decimal field, accepting plain (`85000.0`) and scientific
/// (`8.5e4`) notation.
pub(crate) fn parse_decimal(
    line: u64,
    field: &'static str,
    value: &str,
) -> Result<Decimal, LoadError> {
    value
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| LoadError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        })
}

/// Parses a procedure code. Integral decimals such as `7.0` are accepted.
pub(crate) fn parse_code(
    line: u64,
    value: &str,
) -> Result<i64, LoadError> {
    if let Ok(code) = value.parse::<i64>() {
        return Ok(code);
    }
    let invalid = || LoadError::InvalidCode {
        line,
        value: value.to_string(),
    };
    let decimal = value.parse::<Decimal>().map_err(|_| invalid())?;
    if !decimal.fract().is_zero() {
        return Err(invalid());
    }
    i64::try_from(decimal).map_err(|_| invalid())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}
