//! End-to-end tests for the demo binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn demo() -> Command {
    let mut cmd = cargo_bin_cmd!("flexcli-demo");
    cmd.env("FLEXCLI_COLOR", "never").env_remove("RUST_LOG");
    cmd
}

// ============================================
// Help surface
// ============================================

mod help {
    use super::*;

    #[test]
    fn no_args_shows_help_and_fails() {
        demo()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No command provided."))
            .stdout(predicate::str::contains("Available commands:"));
    }

    #[test]
    fn global_help_lists_commands() {
        demo()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("  add (sync) (aliases: sum, plus)"))
            .stdout(predicate::str::contains("  countdown (async)"))
            .stdout(predicate::str::contains(
                "Use '<command> --help' for details about a specific command.",
            ));
    }

    #[test]
    fn global_help_is_sorted() {
        let output = demo().arg("--help").output().unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        let names: Vec<&str> = stdout
            .lines()
            .filter_map(|line| line.strip_prefix("  "))
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn command_help_through_alias() {
        demo()
            .args(["sum", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Help for command 'add':"))
            .stdout(predicate::str::contains("Adds two numbers and prints the result."));
    }

    #[test]
    fn command_help_default_doc() {
        demo()
            .args(["fail", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No description provided."));
    }
}

// ============================================
// Dispatch
// ============================================

mod dispatch {
    use super::*;

    #[test]
    fn unknown_command_fails_with_help() {
        demo()
            .arg("launch")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unknown command or alias: 'launch'"))
            .stdout(predicate::str::contains("Available commands:"));
    }

    #[test]
    fn unknown_command_suggests_close_names() {
        demo()
            .arg("stp")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Did you mean: stop"));
    }

    #[test]
    fn resolution_is_case_sensitive() {
        demo().arg("GREET").assert().code(1);
    }

    #[test]
    fn greet_with_argument() {
        demo()
            .args(["greet", "Bob"])
            .assert()
            .success()
            .stdout("Hello, Bob!\n");
    }

    #[test]
    fn greet_default_argument() {
        demo()
            .arg("hello")
            .assert()
            .success()
            .stdout("Hello, world!\n");
    }

    #[test]
    fn alias_and_primary_route_identically() {
        for name in ["add", "sum", "plus"] {
            demo()
                .args([name, "2", "3"])
                .assert()
                .success()
                .stdout("The result of 2 + 3 is 5\n");
        }
    }

    #[test]
    fn handler_error_reports_command_name() {
        demo()
            .args(["sum", "2", "three"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Command 'add' failed with error: 'three' is not a number",
            ));
    }

    #[test]
    fn add_accepts_fractions_and_large_values() {
        demo()
            .args(["plus", "2.5", "1"])
            .assert()
            .success()
            .stdout("The result of 2.5 + 1 is 3.5\n");

        demo()
            .args(["add", "9223372036854775807", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-9223372036854775808").not());
    }

    #[test]
    fn extra_arguments_are_rejected() {
        demo()
            .args(["greet", "Bob", "Alice"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Command 'greet' failed with error"));

        demo()
            .args(["stop", "now"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Command 'stop' failed with error"));
    }

    #[test]
    fn always_failing_command() {
        demo()
            .arg("fail")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Command 'fail' failed with error: this command always fails",
            ));
    }

    #[test]
    fn divide_by_zero_is_handled_by_command() {
        demo()
            .args(["divide", "1", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Error: Division by zero is not allowed.",
            ));
    }

    #[test]
    fn divide_prints_result() {
        demo()
            .args(["divide", "6", "3"])
            .assert()
            .success()
            .stdout("The result of 6 / 3 is 2\n");
    }
}

// ============================================
// Async commands
// ============================================

mod async_commands {
    use super::*;

    #[test]
    fn countdown_runs_to_completion() {
        demo()
            .args(["countdown", "1"])
            .assert()
            .success()
            .stdout("1\nCountdown complete!\n");
    }

    #[test]
    fn timer_zero_finishes_immediately() {
        demo()
            .args(["timer", "0"])
            .assert()
            .success()
            .stdout("Time's up!\n");
    }

    #[test]
    fn async_error_is_reported() {
        demo()
            .args(["timer", "soon"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Command 'timer' failed with error"));
    }
}
