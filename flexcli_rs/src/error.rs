//! Error taxonomy for registration and dispatch.

use std::fmt;

use thiserror::Error;

use crate::dispatch::EXIT_FAILURE;

/// Which namespace an already-registered name lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Command,
    Alias,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Command => f.write_str("command"),
            NameKind::Alias => f.write_str("alias"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A name or alias collides with an existing command or alias.
    /// Raised during setup; the registry is left untouched.
    #[error("'{name}' conflicts with an existing {existing}")]
    DuplicateRegistration { name: String, existing: NameKind },

    /// User input did not resolve to any command or alias.
    #[error("Unknown command or alias: '{0}'")]
    UnknownCommand(String),

    /// The handler returned an error or panicked.
    #[error("Command '{command}' failed with error: {message}")]
    HandlerFailure { command: String, message: String },
}

impl CliError {
    /// Exit code reported for this error when it ends a dispatch.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let dup = CliError::DuplicateRegistration {
            name: "sum".into(),
            existing: NameKind::Alias,
        };
        assert_eq!(dup.to_string(), "'sum' conflicts with an existing alias");

        let unknown = CliError::UnknownCommand("nope".into());
        assert_eq!(unknown.to_string(), "Unknown command or alias: 'nope'");

        let failed = CliError::HandlerFailure {
            command: "add".into(),
            message: "invalid digit found in string".into(),
        };
        assert_eq!(
            failed.to_string(),
            "Command 'add' failed with error: invalid digit found in string"
        );
        assert_eq!(failed.exit_code(), 1);
    }
}
