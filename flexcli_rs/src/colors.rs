//! Terminal color utilities for help and notice output.
//!
//! Provides ANSI color codes and a small `Painter` so formatting code can
//! stay oblivious to whether colors are on.

use std::io::IsTerminal;

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

/// When to emit ANSI colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "yes" | "true" => Ok(ColorMode::Always),
            "never" | "no" | "false" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Invalid color mode '{}'. Use: auto, always, or never.",
                value
            )),
        }
    }
}

/// Determines if colors should be used on stdout.
pub fn is_enabled(mode: ColorMode) -> bool {
    enabled_for(mode, std::io::stdout().is_terminal())
}

/// Same as [`is_enabled`], but for output written to stderr.
pub fn is_enabled_stderr(mode: ColorMode) -> bool {
    enabled_for(mode, std::io::stderr().is_terminal())
}

fn enabled_for(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal,
    }
}

/// Colorizer that can be passed around to format functions.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    /// Painter for stderr; `Auto` follows whether stderr is a terminal.
    pub fn for_stderr(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled_stderr(mode),
        }
    }

    /// A painter that never colors.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Headers, titles - BOLD
    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    /// Command names - CYAN
    pub fn command(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Secondary info, hints - DIM
    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    pub fn warn(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}
