//! The interactive estimate loop.

use std::io::{BufRead, Write};

use mri_core::{EstimateError, EstimateRequest, Estimator, format_currency};
use mri_data::ReferenceData;
use rust_decimal::Decimal;
use tracing::info;

use crate::selectors::{select_procedure, select_technician};
use crate::{Console, SessionError};

pub const CONTINUE_PROMPT: &str = "\nWould you like to go again? y/n: ";
pub const FAREWELL: &str = "Thanks for using the MRI cost calculator, goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

impl SessionState {
    /// Only `y` or `yes` (any case, surrounding space ignored) keeps going.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Running,
            _ => Self::Stopped,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Number of estimates printed before the user stopped.
    pub estimates: usize,
}

/// Formats the line printed for a finished estimate.
pub fn result_line(
    description: &str,
    code: i64,
    technician: &str,
    total: Decimal,
) -> String {
    format!(
        "The estimated cost of the {description} (code:{code}) procedure, performed by {technician}, is {}",
        format_currency(total)
    )
}

/// One user's run of the calculator over a fixed set of reference tables.
pub struct Session<'a, R, W> {
    data: &'a ReferenceData,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        data: &'a ReferenceData,
        console: Console<R, W>,
    ) -> Self {
        Self { data, console }
    }

    /// Runs estimates until the user declines to continue.
    ///
    /// Any error ends the session immediately; nothing is retried here.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let data = self.data;
        let estimator = Estimator::new(&data.costs, &data.technicians);
        let mut state = SessionState::Running;
        let mut estimates = 0;

        while state == SessionState::Running {
            let code = select_procedure(&mut self.console, &data.catalog)?;
            let technician = select_technician(&mut self.console, &data.technicians)?;
            let request = EstimateRequest::new(code, technician);

            let estimate = estimator.estimate(&request)?;
            let description = data
                .catalog
                .description(code)
                .ok_or(EstimateError::UnknownProcedure(code))?;

            writeln!(
                self.console.output(),
                "\n{}",
                result_line(description, code, &request.technician, estimate.total)
            )?;
            estimates += 1;
            info!(
                code,
                technician = %request.technician,
                total = %estimate.total,
                "estimate printed"
            );

            state = match self.console.ask(CONTINUE_PROMPT)? {
                Some(answer) => SessionState::from_answer(&answer),
                None => SessionState::Stopped,
            };
        }

        writeln!(self.console.output(), "\n{FAREWELL}")?;
        Ok(SessionSummary { estimates })
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn from_answer_accepts_y_and_yes_in_any_case() {
        for answer in ["y", "yes", "Y", "YES", "  Yes  "] {
            assert_eq!(SessionState::from_answer(answer), SessionState::Running, "{answer:?}");
        }
    }

    #[test]
    fn from_answer_stops_on_anything_else() {
        for answer in ["n", "no", "", "yep", "y y", "1"] {
            assert_eq!(SessionState::from_answer(answer), SessionState::Stopped, "{answer:?}");
        }
    }

    #[test]
    fn result_line_formats_amount_as_currency() {
        let line = result_line("Brain MRI", 1, "Bob", dec!(281.25));

        assert_eq!(
            line,
            "The estimated cost of the Brain MRI (code:1) procedure, performed by Bob, is $281.25"
        );
    }

    #[test]
    fn result_line_uses_thousands_separator() {
        let line = result_line("Cardiac MRI", 3, "Alice", dec!(12345.6789));

        assert!(line.ends_with("is $12,345.68"));
    }
}
