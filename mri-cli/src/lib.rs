//! Interactive MRI procedure cost calculator.
//!
//! The binary loads the reference tables once, then runs a [`Session`]:
//! pick a procedure, pick a technician, print the estimate, repeat while the
//! user answers `y`.

pub mod cli;
pub mod console;
pub mod error;
pub mod selectors;
pub mod session;

pub use console::{Console, InputPolicy, NumberAnswer};
pub use error::SessionError;
pub use session::{Session, SessionState, SessionSummary};
