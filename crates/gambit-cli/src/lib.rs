//! Interactive command-line play for gambit.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::CliError;
pub use session::{Session, SessionConfig};
