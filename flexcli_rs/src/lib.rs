//! # flexcli
//!
//! **Command-dispatch core for command-line tools.** Register named handlers
//! (sync or async) with optional aliases and docs, then hand the argument
//! vector to [`Cli`] and get a process exit code back.
//!
//! ## Features
//!
//! - **Single namespace** - command names and aliases never collide; conflicts
//!   fail at registration and leave the registry untouched
//! - **Uniform execution** - sync handlers run inline, async handlers are
//!   awaited on a single-threaded runner; errors and panics become exit code 1
//! - **Help and completion** - global/per-command help, prefix completion,
//!   optional "did you mean" hints
//! - **No globals** - every [`Cli`] owns its own [`Registry`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flexcli::{Cli, Handler};
//!
//! let mut cli = Cli::new();
//! cli.register(
//!     "greet",
//!     Handler::sync(|args| {
//!         let name = args.first().map(String::as_str).unwrap_or("world");
//!         println!("Hello, {name}!");
//!         Ok(())
//!     }),
//!     &["hi"],
//!     Some("Greets the user."),
//! )
//! .expect("greet registers once");
//!
//! cli.run_env();
//! ```
//!
//! ## Argument surface
//!
//! ```bash
//! app                 # exit 1, global help
//! app --help          # exit 0, global help
//! app greet --help    # exit 0, help for greet
//! app hi Bob          # runs greet with ["Bob"]
//! ```

pub mod cli;
pub mod colors;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod handler;
pub mod help;
pub mod registry;
pub mod resolve;

pub use cli::{Cli, CliOptions};
pub use colors::{ColorMode, Painter};
pub use dispatch::{Dispatch, EXIT_FAILURE, EXIT_SUCCESS, HELP_FLAG, plan};
pub use error::{CliError, NameKind, Result};
pub use executor::execute;
pub use handler::{Handler, HandlerResult};
pub use registry::{Command, CommandSpec, DEFAULT_DOC, Registry};
pub use resolve::{resolve, suggest};
