use mri_core::EstimateError;
use thiserror::Error;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input closed while a menu was waiting for an answer.
    #[error("input ended before a selection was made")]
    UnexpectedEof,

    /// A menu answer was not a number and the input policy is
    /// [`InputPolicy::Abort`](crate::InputPolicy::Abort).
    #[error("'{input}' is not a valid number")]
    MalformedInput { input: String },

    /// A menu has nothing to choose from.
    #[error("no {0} available to choose from")]
    NoChoices(&'static str),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
