//! Command registry: primary names, aliases and documentation.
//!
//! Primary names and aliases share a single namespace. Every name is unique
//! across both sets, so a lookup never has to break a tie at dispatch time;
//! collisions are rejected when the command is registered.

use std::collections::HashMap;
use std::future::Future;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{CliError, NameKind, Result};
use crate::handler::{Handler, HandlerResult};

/// Doc stored for commands registered without one.
pub const DEFAULT_DOC: &str = "No description provided.";

/// A registered command. Immutable once installed.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    handler: Handler,
    doc: String,
    aliases: Vec<String>,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Aliases in the order they were registered.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn is_async(&self) -> bool {
        self.handler.is_async()
    }
}

/// Everything needed to register one command.
///
/// ```
/// use flexcli::{CommandSpec, Handler, Registry};
///
/// let mut registry = Registry::new();
/// registry
///     .register_spec(
///         CommandSpec::new("add", Handler::sync(|_| Ok(())))
///             .alias("sum")
///             .doc("Adds two numbers."),
///     )
///     .unwrap();
/// assert_eq!(registry.resolve_alias("sum"), Some("add"));
/// ```
#[derive(Debug, Clone)]
pub struct CommandSpec {
    name: String,
    handler: Handler,
    aliases: Vec<String>,
    doc: Option<String>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, handler: Handler) -> Self {
        Self {
            name: name.into(),
            handler,
            aliases: Vec::new(),
            doc: None,
        }
    }

    /// Spec for a blocking handler.
    pub fn sync<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[String]) -> HandlerResult + Send + Sync + 'static,
    {
        Self::new(name, Handler::sync(f))
    }

    /// Spec for a handler returning a future.
    pub fn asynchronous<F, Fut>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + 'static,
    {
        Self::new(name, Handler::asynchronous(f))
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Owns every command, alias and doc string, plus the sorted listing cache.
///
/// Registration takes `&mut self`, so all commands are installed before any
/// shared borrow is handed to the dispatcher.
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<String, Command>,
    /// alias -> primary command name
    aliases: HashMap<String, String>,
    listing: OnceCell<Vec<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with its handler, aliases and optional doc.
    ///
    /// Fails with [`CliError::DuplicateRegistration`] if `name` or any alias is
    /// already taken. Either the command and all aliases are installed, or
    /// nothing changes.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Handler,
        aliases: &[&str],
        doc: Option<&str>,
    ) -> Result<()> {
        let mut spec = CommandSpec::new(name, handler).aliases(aliases.iter().copied());
        spec.doc = doc.map(str::to_string);
        self.register_spec(spec)
    }

    /// [`Registry::register`] for a blocking handler.
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
        self.register(name, Handler::sync(f), aliases, doc)
    }

    /// [`Registry::register`] for a handler returning a future.
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
        self.register(name, Handler::asynchronous(f), aliases, doc)
    }

    pub fn register_spec(&mut self, spec: CommandSpec) -> Result<()> {
        self.check_available(&spec.name)?;

        for (idx, alias) in spec.aliases.iter().enumerate() {
            self.check_available(alias)?;
            if *alias == spec.name {
                return Err(duplicate(alias, NameKind::Command));
            }
            if spec.aliases[..idx].contains(alias) {
                return Err(duplicate(alias, NameKind::Alias));
            }
        }

        // All checks passed; nothing below can fail.
        let CommandSpec {
            name,
            handler,
            aliases,
            doc,
        } = spec;

        debug!(
            command = %name,
            mode = handler.label(),
            aliases = ?aliases,
            "registered command"
        );

        for alias in &aliases {
            self.aliases.insert(alias.clone(), name.clone());
        }
        self.commands.insert(
            name.clone(),
            Command {
                name,
                handler,
                doc: doc.unwrap_or_else(|| DEFAULT_DOC.to_string()),
                aliases,
            },
        );
        self.listing.take();
        Ok(())
    }

    fn check_available(&self, name: &str) -> Result<()> {
        if self.commands.contains_key(name) {
            Err(duplicate(name, NameKind::Command))
        } else if self.aliases.contains_key(name) {
            Err(duplicate(name, NameKind::Alias))
        } else {
            Ok(())
        }
    }

    /// Map user input to a primary command name.
    ///
    /// Returns `name` itself for primary names, the alias target for aliases,
    /// and `None` otherwise. Matching is exact and case-sensitive.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.commands.contains_key(name) {
            return Some(name);
        }
        self.aliases.get(name).map(String::as_str)
    }

    /// Sorted primary command names. Cached until the next registration.
    pub fn list_primary(&self) -> &[String] {
        self.listing.get_or_init(|| {
            let mut names: Vec<String> = self.commands.keys().cloned().collect();
            names.sort();
            names
        })
    }

    /// Every alias that targets `name`. Empty for unknown names.
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        self.commands
            .get(name)
            .map(|cmd| cmd.aliases.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Alias table entries, `(alias, primary)`, in no particular order.
    pub fn alias_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// Look up a primary command by its canonical name (aliases not followed).
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn doc(&self, name: &str) -> Option<&str> {
        self.commands.get(name).map(Command::doc)
    }

    pub fn is_async(&self, name: &str) -> Option<bool> {
        self.commands.get(name).map(Command::is_async)
    }

    /// True if `name` is taken by either a command or an alias.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve_alias(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn duplicate(name: &str, existing: NameKind) -> CliError {
    CliError::DuplicateRegistration {
        name: name.to_string(),
        existing,
    }
}
