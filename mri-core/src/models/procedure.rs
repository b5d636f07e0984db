use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::mean;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureEntry {
    pub code: i64,
    pub description: String,
}

/// Procedure descriptions keyed by code, in the order codes were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureCatalog {
    entries: Vec<ProcedureEntry>,
}

impl ProcedureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, or replaces the description of an existing code.
    ///
    /// Returns the previous description when the code was already present.
    pub fn insert(
        &mut self,
        entry: ProcedureEntry,
    ) -> Option<String> {
        match self.entries.iter_mut().find(|e| e.code == entry.code) {
            Some(existing) => Some(std::mem::replace(
                &mut existing.description,
                entry.description,
            )),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn description(
        &self,
        code: i64,
    ) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.description.as_str())
    }

    pub fn contains(
        &self,
        code: i64,
    ) -> bool {
        self.description(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcedureEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ProcedureEntry> for ProcedureCatalog {
    fn from_iter<I: IntoIterator<Item = ProcedureEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

/// One row of the procedure cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureCostRow {
    pub code: i64,
    pub base_cost: Decimal,
    /// Estimated exam durations, in minutes.
    pub duration_samples: Vec<Decimal>,
}

impl ProcedureCostRow {
    /// Mean of the duration samples.
    ///
    /// Returns `None` when the row has no samples or their sum overflows.
    pub fn average_duration(&self) -> Option<Decimal> {
        mean(&self.duration_samples)
    }
}

/// Cost rows in file order. Duplicate codes are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureCostTable {
    rows: Vec<ProcedureCostRow>,
}

impl ProcedureCostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        row: ProcedureCostRow,
    ) {
        self.rows.push(row);
    }

    /// Finds the row for `code`.
    ///
    /// When several rows share the code, the first one in file order wins.
    pub fn find(
        &self,
        code: i64,
    ) -> Option<&ProcedureCostRow> {
        self.rows.iter().find(|row| row.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcedureCostRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ProcedureCostRow> for ProcedureCostTable {
    fn from_iter<I: IntoIterator<Item = ProcedureCostRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
