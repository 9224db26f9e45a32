//! Dispatch state machine.
//!
//! [`plan`] classifies an argument sequence without side effects; the caller
//! (see [`crate::Cli::run_async`]) carries out the resulting action.
//!
//! ```text
//! []                    -> NoCommand     exit 1, global help
//! ["--help", ..]        -> GlobalHelp    exit 0
//! [unknown, ..]         -> Unknown       exit 1, notice + global help
//! [name, "--help", ..]  -> CommandHelp   exit 0
//! [name, args..]        -> Execute       exit 0, or 1 on handler failure
//! ```

use crate::registry::{Command, Registry};
use crate::resolve::resolve;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Flag recognized in first (global) or second (per-command) position.
pub const HELP_FLAG: &str = "--help";

/// What a dispatch will do for a given argument sequence.
#[derive(Debug)]
pub enum Dispatch<'r> {
    /// No arguments at all.
    NoCommand,
    GlobalHelp,
    /// First token is neither a command nor an alias.
    Unknown(String),
    CommandHelp(&'r Command),
    /// Run the command with the tokens after its name.
    Execute(&'r Command, Vec<String>),
}

impl Dispatch<'_> {
    /// Exit code for outcomes decided before any handler runs.
    /// `Execute` depends on the handler and returns `None`.
    pub fn static_exit_code(&self) -> Option<i32> {
        match self {
            Dispatch::NoCommand | Dispatch::Unknown(_) => Some(EXIT_FAILURE),
            Dispatch::GlobalHelp | Dispatch::CommandHelp(_) => Some(EXIT_SUCCESS),
            Dispatch::Execute(..) => None,
        }
    }
}

/// Classify `args` against `registry`.
pub fn plan<'r>(registry: &'r Registry, args: &[String]) -> Dispatch<'r> {
    let Some((first, rest)) = args.split_first() else {
        return Dispatch::NoCommand;
    };

    if first == HELP_FLAG {
        return Dispatch::GlobalHelp;
    }

    let Some(command) = resolve(registry, first) else {
        return Dispatch::Unknown(first.clone());
    };

    if rest.first().is_some_and(|arg| arg == HELP_FLAG) {
        return Dispatch::CommandHelp(command);
    }

    Dispatch::Execute(command, rest.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register("add", Handler::sync(|_| Ok(())), &["sum"], None)
            .unwrap();
        registry
            .register("greet", Handler::sync(|_| Ok(())), &[], None)
            .unwrap();
        registry
    }

    #[test]
    fn test_empty_args() {
        let registry = registry();
        let dispatch = plan(&registry, &[]);
        assert!(matches!(dispatch, Dispatch::NoCommand));
        assert_eq!(dispatch.static_exit_code(), Some(1));
    }

    #[test]
    fn test_global_help_wins_over_everything() {
        let registry = registry();
        assert!(matches!(
            plan(&registry, &args(&["--help", "add"])),
            Dispatch::GlobalHelp
        ));
    }

    #[test]
    fn test_unknown_command() {
        let registry = registry();
        match plan(&registry, &args(&["nope", "1"])) {
            Dispatch::Unknown(input) => assert_eq!(input, "nope"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_command_help_through_alias() {
        let registry = registry();
        match plan(&registry, &args(&["sum", "--help", "extra"])) {
            Dispatch::CommandHelp(cmd) => assert_eq!(cmd.name(), "add"),
            other => panic!("expected CommandHelp, got {other:?}"),
        }
    }

    #[test]
    fn test_help_flag_later_is_passed_through() {
        let registry = registry();
        match plan(&registry, &args(&["greet", "Bob", "--help"])) {
            Dispatch::Execute(cmd, rest) => {
                assert_eq!(cmd.name(), "greet");
                assert_eq!(rest, args(&["Bob", "--help"]));
            }
            other => panic!("expected Execute, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_with_trailing_tokens() {
        let registry = registry();
        match plan(&registry, &args(&["sum", "2", "3"])) {
            Dispatch::Execute(cmd, rest) => {
                assert_eq!(cmd.name(), "add");
                assert_eq!(rest, args(&["2", "3"]));
            }
            other => panic!("expected Execute, got {other:?}"),
        }

        match plan(&registry, &args(&["greet"])) {
            Dispatch::Execute(cmd, rest) => {
                assert_eq!(cmd.name(), "greet");
                assert!(rest.is_empty());
            }
            other => panic!("expected Execute, got {other:?}"),
        }
    }
}
