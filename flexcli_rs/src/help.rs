//! Help text generation and completion over the registry.
//!
//! Everything here is read-only: formatting never touches handlers.

use crate::colors::Painter;
use crate::registry::Registry;

/// Doc shown for a name with no stored documentation.
pub const MISSING_DOC: &str = "No description available.";

pub const GLOBAL_HELP_HINT: &str = "Use '<command> --help' for details about a specific command.";

impl Registry {
    /// Generate the global help listing every primary command.
    ///
    /// One line per command: name, `(sync)`/`(async)` tag and, when present,
    /// an `(aliases: ...)` suffix. Ends with the per-command help hint.
    pub fn format_global_help(&self, painter: &Painter) -> String {
        let mut help = String::new();
        help.push_str(&painter.header("Available commands:"));
        help.push('\n');

        for name in self.list_primary() {
            let tag = match self.is_async(name) {
                Some(true) => "(async)",
                _ => "(sync)",
            };
            help.push_str(&format!(
                "  {} {}{}\n",
                painter.command(name),
                painter.dim(tag),
                self.format_aliases(name)
            ));
        }

        help.push('\n');
        help.push_str(GLOBAL_HELP_HINT);
        help
    }

    fn format_aliases(&self, name: &str) -> String {
        let aliases = self.aliases_of(name);
        if aliases.is_empty() {
            String::new()
        } else {
            format!(" (aliases: {})", aliases.join(", "))
        }
    }

    /// Generate help for a single command from its stored doc.
    pub fn format_command_help(&self, name: &str, painter: &Painter) -> String {
        let doc = self.doc(name).unwrap_or(MISSING_DOC);
        format!(
            "{}\n{}",
            painter.header(&format!("Help for command '{name}':")),
            doc
        )
    }

    /// Primary names and aliases starting with `prefix`, sorted ascending.
    ///
    /// Matching is byte-wise and case-sensitive; an empty prefix returns every
    /// name and alias.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut suggestions: Vec<String> = self
            .list_primary()
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();
        suggestions.extend(
            self.alias_entries()
                .map(|(alias, _)| alias)
                .filter(|alias| alias.starts_with(prefix))
                .map(str::to_string),
        );
        suggestions.sort();
        suggestions
    }
}
