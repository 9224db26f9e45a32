//! Handler capability: the logic a command runs, synchronous or asynchronous.
//!
//! Handlers receive the raw tokens that followed the command name and are
//! responsible for converting and validating them. Returning `Err` (or
//! panicking) is reported by the executor as a handler failure; a handler that
//! deals with its own domain errors and returns `Ok(())` is a success.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

/// Outcome every handler reports back to the executor.
pub type HandlerResult = anyhow::Result<()>;

/// Synchronous handler: runs to completion without yielding.
pub type SyncFn = dyn Fn(&[String]) -> HandlerResult + Send + Sync;

/// Asynchronous handler: returns a future polled on the single-threaded runner.
/// The future itself need not be `Send`.
pub type AsyncFn = dyn Fn(Vec<String>) -> LocalBoxFuture<'static, HandlerResult> + Send + Sync;

/// A command handler, tagged by execution mode.
#[derive(Clone)]
pub enum Handler {
    Sync(Arc<SyncFn>),
    Async(Arc<AsyncFn>),
}

impl Handler {
    /// Wrap a blocking function.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> HandlerResult + Send + Sync + 'static,
    {
        Handler::Sync(Arc::new(f))
    }

    /// Wrap a function returning a future. The future may only suspend at its
    /// own `.await` points; nothing else runs on the runner meanwhile.
    pub fn asynchronous<F, Fut>(f: F) -> Self
    where
        F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + 'static,
    {
        Handler::Async(Arc::new(move |args| f(args).boxed_local()))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Handler::Async(_))
    }

    /// Tag shown in help output.
    pub fn label(&self) -> &'static str {
        match self {
            Handler::Sync(_) => "sync",
            Handler::Async(_) => "async",
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{}", if self.is_async() { "Async" } else { "Sync" })
    }
}
