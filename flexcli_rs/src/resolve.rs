//! Resolution of user input to a registered command.
//!
//! Dispatch only ever uses [`resolve`], which is exact and case-sensitive.
//! [`suggest`] is an opt-in helper for "did you mean" hints; it never changes
//! what gets executed.

use strsim::levenshtein;
use tracing::debug;

use crate::registry::{Command, Registry};

/// Max edit distance for a fuzzy suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Resolve the first argument token to its command, following aliases.
pub fn resolve<'r>(registry: &'r Registry, input: &str) -> Option<&'r Command> {
    let command = registry
        .resolve_alias(input)
        .and_then(|name| registry.get(name));
    debug!(input = %input, resolved = command.map(Command::name), "resolve");
    command
}

/// Suggest names or aliases close to `input`.
///
/// Prefix completions win when there are any. Otherwise falls back to
/// entries within a small Levenshtein distance, closest first.
pub fn suggest(registry: &Registry, input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let completions = registry.complete(input);
    if !completions.is_empty() {
        return completions;
    }

    let needle = input.to_lowercase();
    let mut scored: Vec<(usize, &str)> = registry
        .list_primary()
        .iter()
        .map(String::as_str)
        .chain(registry.alias_entries().map(|(alias, _)| alias))
        .filter_map(|candidate| {
            let distance = levenshtein(&needle, &candidate.to_lowercase());
            (distance <= MAX_SUGGESTION_DISTANCE).then_some((distance, candidate))
        })
        .collect();
    scored.sort();

    scored
        .into_iter()
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        for (name, aliases) in [
            ("start", &["go"][..]),
            ("stop", &[][..]),
            ("restart", &[][..]),
            ("add", &["sum"][..]),
        ] {
            registry
                .register(name, Handler::sync(|_| Ok(())), aliases, None)
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_resolve_follows_aliases() {
        let registry = registry();
        assert_eq!(resolve(&registry, "sum").map(Command::name), Some("add"));
        assert_eq!(resolve(&registry, "add").map(Command::name), Some("add"));
        assert!(resolve(&registry, "SUM").is_none());
        assert!(resolve(&registry, "ad").is_none());
    }

    #[test]
    fn test_suggest_prefers_prefix_matches() {
        let registry = registry();
        assert_eq!(suggest(&registry, "st"), vec!["start", "stop"]);
    }

    #[test]
    fn test_suggest_falls_back_to_edit_distance() {
        let registry = registry();
        assert_eq!(suggest(&registry, "stp"), vec!["stop", "sum"]);
        assert_eq!(suggest(&registry, "Restrat"), vec!["restart"]);
        assert!(suggest(&registry, "completely-unrelated").is_empty());
    }

    #[test]
    fn test_suggest_empty_input() {
        assert!(suggest(&registry(), "").is_empty());
    }
}
