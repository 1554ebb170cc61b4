//! Command-line session errors.

/// Errors that can occur while reading and interpreting session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command that needs an argument was given none.
    #[error("missing argument for `{command}`")]
    MissingArgument {
        /// The command that was missing its argument.
        command: String,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {input}")]
    InvalidSquare {
        /// The text that failed to parse.
        input: String,
    },

    /// A coordinate move such as `e2e4` or `e7e8q` could not be parsed.
    #[error("invalid move: {input}")]
    InvalidMove {
        /// The text that failed to parse.
        input: String,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given something other than `on` or `off`.
    #[error("invalid value for {name}: {value} (expected on or off)")]
    InvalidValue {
        /// The option being set.
        name: String,
        /// The value as typed.
        value: String,
    },

    /// The command word was not recognized.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The command as typed.
        command: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
