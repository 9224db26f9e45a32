//! The `Cli` value: a registry plus presentation options, and the entry
//! points that turn an argument vector into an exit code.
//!
//! `run_async` is the library/embedded entry: it never exits the process.
//! `run` creates a fresh single-threaded runtime, dispatches, and exits.

use std::future::Future;

use tracing::{Instrument, debug, info_span};

use crate::colors::{ColorMode, Painter};
use crate::dispatch::{Dispatch, EXIT_FAILURE, EXIT_SUCCESS, plan};
use crate::error::{CliError, Result};
use crate::executor::execute;
use crate::handler::{Handler, HandlerResult};
use crate::registry::{CommandSpec, Registry};
use crate::resolve::suggest;

/// Presentation options for a [`Cli`].
#[derive(Debug, Clone)]
pub struct CliOptions {
    /// Name used in log spans and startup errors.
    pub program_name: String,
    /// Color mode for help and notices.
    pub color: ColorMode,
    /// Append "Did you mean" hints to unknown-command notices.
    pub suggestions: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            program_name: "cli".to_string(),
            color: ColorMode::Auto,
            suggestions: false,
        }
    }
}

/// A command-line application: owns its registry, no global state.
#[derive(Debug, Default)]
pub struct Cli {
    registry: Registry,
    options: CliOptions,
}

impl Cli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CliOptions) -> Self {
        Self {
            registry: Registry::new(),
            options,
        }
    }

    pub fn options(&self) -> &CliOptions {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// See [`Registry::register`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Handler,
        aliases: &[&str],
        doc: Option<&str>,
    ) -> Result<()> {
        self.registry.register(name, handler, aliases, doc)
    }

    /// See [`Registry::register_sync`].
    pub fn register_sync<F>(
        &mut self,
        name: impl Into<String>,
        aliases: &[&str],
        doc: Option<&str>,
        f: F,
    ) -> Result<()>
    where
        F: Fn(&[String]) -> HandlerResult + Send + Sync + 'static,
    {
        self.registry.register_sync(name, aliases, doc, f)
    }

    /// See [`Registry::register_async`].
    pub fn register_async<F, Fut>(
        &mut self,
        name: impl Into<String>,
        aliases: &[&str],
        doc: Option<&str>,
        f: F,
    ) -> Result<()>
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + 'static,
    {
        self.registry.register_async(name, aliases, doc, f)
    }

    pub fn register_spec(&mut self, spec: CommandSpec) -> Result<()> {
        self.registry.register_spec(spec)
    }

    /// Primary names and aliases starting with `prefix`.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.registry.complete(prefix)
    }

    fn painter(&self) -> Painter {
        Painter::new(self.options.color)
    }

    /// Painter for notices, which go to stderr.
    fn notice_painter(&self) -> Painter {
        Painter::for_stderr(self.options.color)
    }

    pub fn show_global_help(&self) {
        println!("{}", self.registry.format_global_help(&self.painter()));
    }

    pub fn show_command_help(&self, name: &str) {
        println!(
            "{}",
            self.registry.format_command_help(name, &self.painter())
        );
    }

    /// Dispatch `args` (without the program name) and return the exit code.
    ///
    /// Runs on the caller's runtime. Async handlers are awaited in place, so
    /// exactly one handler is active at a time.
    pub async fn run_async<I, S>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let span = info_span!("dispatch", program = %self.options.program_name);
        self.dispatch(args).instrument(span).await
    }

    async fn dispatch(&self, args: Vec<String>) -> i32 {
        let notices = self.notice_painter();
        let dispatch = plan(&self.registry, &args);
        let code = dispatch.static_exit_code();

        match dispatch {
            Dispatch::NoCommand => {
                eprintln!("{}\n", notices.warn("No command provided."));
                self.show_global_help();
            }
            Dispatch::GlobalHelp => self.show_global_help(),
            Dispatch::Unknown(input) => {
                debug!(input = %input, "unknown command");
                let hint = if self.options.suggestions {
                    suggest(&self.registry, &input)
                } else {
                    Vec::new()
                };
                let err = CliError::UnknownCommand(input);
                eprintln!("{}", notices.error(&err.to_string()));
                if !hint.is_empty() {
                    eprintln!("Did you mean: {}?", hint.join(", "));
                }
                eprintln!();
                self.show_global_help();
            }
            Dispatch::CommandHelp(command) => self.show_command_help(command.name()),
            Dispatch::Execute(command, rest) => {
                return match execute(command, rest).await {
                    Ok(()) => EXIT_SUCCESS,
                    Err(err) => {
                        eprintln!("{}", notices.error(&err.to_string()));
                        err.exit_code()
                    }
                };
            }
        }

        code.unwrap_or(EXIT_FAILURE)
    }

    /// Dispatch on a fresh single-threaded runtime and return the exit code.
    ///
    /// Must not be called from inside another tokio runtime; use
    /// [`Cli::run_async`] there.
    pub fn run_blocking<I, S>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                eprintln!(
                    "[{}] failed to start runtime: {}",
                    self.options.program_name, err
                );
                return EXIT_FAILURE;
            }
        };
        runtime.block_on(self.run_async(args))
    }

    /// Dispatch `args` and exit the process with the resulting code.
    pub fn run<I, S>(&self, args: I) -> !
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        std::process::exit(self.run_blocking(args))
    }

    /// Dispatch the process arguments (program name skipped) and exit.
    pub fn run_env(&self) -> ! {
        self.run(std::env::args().skip(1))
    }
}
