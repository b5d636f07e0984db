//! Prompt-and-read plumbing shared by the menus and the session loop.

use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::ValueEnum;
use tracing::warn;

use crate::SessionError;

/// How a menu treats an answer that is not a number at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputPolicy {
    /// End the session with [`SessionError::MalformedInput`].
    #[default]
    Abort,
    /// Report the problem and ask again, like an out-of-range choice.
    Reprompt,
}

/// Console wrapper over any line-oriented input and output.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    policy: InputPolicy,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        input: R,
        output: W,
        policy: InputPolicy,
    ) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt`, then reads one line. Returns `None` at end of input.
    pub fn ask(
        &mut self,
        prompt: &str,
    ) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a number.
    ///
    /// An answer made only of digits (with an optional sign) that does not
    /// fit `T` comes back as [`NumberAnswer::OutOfRange`], so the menu can
    /// treat it like any other invalid choice.
    ///
    /// # Errors
    ///
    /// * [`SessionError::UnexpectedEof`] if input ends first.
    /// * [`SessionError::MalformedInput`] for non-numeric text under
    ///   [`InputPolicy::Abort`].
    pub fn ask_number<T: FromStr>(
        &mut self,
        prompt: &str,
    ) -> Result<NumberAnswer<T>, SessionError> {
        let answer = self.ask(prompt)?.ok_or(SessionError::UnexpectedEof)?;
        if let Ok(value) = answer.parse::<T>() {
            return Ok(NumberAnswer::Value(value));
        }
        if is_integer_text(&answer) {
            warn!(input = %answer, "numeric menu answer out of range");
            return Ok(NumberAnswer::OutOfRange);
        }
        match self.policy {
            InputPolicy::Abort => Err(SessionError::MalformedInput { input: answer }),
            InputPolicy::Reprompt => {
                warn!(input = %answer, "ignoring non-numeric menu answer");
                writeln!(
                    self.output,
                    "\nSorry, '{answer}' is not a number. Please try again...\n"
                )?;
                Ok(NumberAnswer::Unreadable)
            }
        }
    }
}

/// Outcome of [`Console::ask_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberAnswer<T> {
    Value(T),
    /// A whole number too large for the requested type.
    OutOfRange,
    /// Text that is not a number, already reported to the user.
    Unreadable,
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
