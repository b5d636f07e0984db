//! The two menus of a session: procedure and technician.
//!
//! Both keep asking until they get a valid choice. Numeric answers that are
//! not a valid choice, however large, are always retried; non-numeric answers
//! follow the console's [`InputPolicy`].
//!
//! [`InputPolicy`]: crate::InputPolicy

use std::io::{BufRead, Write};

use mri_core::{ProcedureCatalog, TechnicianRoster};
use tracing::warn;

use crate::{Console, NumberAnswer, SessionError};

/// Lists the catalog as `<description> (<code>)` and returns a code that is
/// in the catalog.
pub fn select_procedure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &ProcedureCatalog,
) -> Result<i64, SessionError> {
    if catalog.is_empty() {
        return Err(SessionError::NoChoices("procedures"));
    }

    loop {
        let out = console.output();
        writeln!(out, "\nThe following exams are available:\n")?;
        for entry in catalog.iter() {
            writeln!(out, "{} ({})", entry.description, entry.code)?;
        }

        let code = match console.ask_number::<i64>(
            "\nPlease select your exam by entering the numeric procedure code: ",
        )? {
            NumberAnswer::Value(code) => Some(code),
            NumberAnswer::OutOfRange => None,
            NumberAnswer::Unreadable => continue,
        };

        if let Some(code) = code.filter(|code| catalog.contains(*code)) {
            return Ok(code);
        }
        warn!(?code, "procedure code not in catalog");
        writeln!(
            console.output(),
            "\nSorry, that was an invalid procedure code. Please try again...\n"
        )?;
    }
}

/// Lists technicians as a 1-based numbered menu and returns the chosen name.
pub fn select_technician<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    roster: &TechnicianRoster,
) -> Result<String, SessionError> {
    if roster.is_empty() {
        return Err(SessionError::NoChoices("technicians"));
    }

    loop {
        let out = console.output();
        writeln!(out, "\nChoose from the following MRI technicians:\n")?;
        for (i, technician) in roster.iter().enumerate() {
            writeln!(out, "{}.) {}", i + 1, technician.name)?;
        }

        let prompt = format!("\nPlease choose your option [1 to {}]: ", roster.len());
        let choice = match console.ask_number::<i64>(&prompt)? {
            NumberAnswer::Value(choice) => Some(choice),
            NumberAnswer::OutOfRange => None,
            NumberAnswer::Unreadable => continue,
        };

        let technician = choice
            .and_then(|choice| usize::try_from(choice).ok())
            .and_then(|position| roster.by_position(position));
        if let Some(technician) = technician {
            return Ok(technician.name.clone());
        }
        warn!(?choice, count = roster.len(), "technician option out of range");
        writeln!(
            console.output(),
            "\nSorry, that was an invalid technician option. Please try again...\n"
        )?;
    }
}
