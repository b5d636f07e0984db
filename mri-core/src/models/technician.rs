use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    pub name: String,
    pub annual_salary: Decimal,
}

/// Technicians keyed by name, kept in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianRoster {
    technicians: Vec<Technician>,
}

impl TechnicianRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a technician, or replaces the salary of an existing one.
    ///
    /// A replaced technician keeps its original position. Returns the
    /// previous salary when the name was already present.
    pub fn insert(
        &mut self,
        technician: Technician,
    ) -> Option<Decimal> {
        match self
            .technicians
            .iter_mut()
            .find(|t| t.name == technician.name)
        {
            Some(existing) => Some(std::mem::replace(
                &mut existing.annual_salary,
                technician.annual_salary,
            )),
            None => {
                self.technicians.push(technician);
                None
            }
        }
    }

    pub fn salary_of(
        &self,
        name: &str,
    ) -> Option<Decimal> {
        self.technicians
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.annual_salary)
    }

    /// Returns the technician at a 1-based position, as shown in menus.
    pub fn by_position(
        &self,
        position: usize,
    ) -> Option<&Technician> {
        position
            .checked_sub(1)
            .and_then(|index| self.technicians.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Technician> {
        self.technicians.iter()
    }

    pub fn len(&self) -> usize {
        self.technicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technicians.is_empty()
    }
}

impl FromIterator<Technician> for TechnicianRoster {
    fn from_iter<I: IntoIterator<Item = Technician>>(iter: I) -> Self {
        let mut roster = Self::new();
        for technician in iter {
            roster.insert(technician);
        }
        roster
    }
}
