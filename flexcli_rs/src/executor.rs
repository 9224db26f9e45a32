//! Uniform execution of sync and async handlers.
//!
//! Sync handlers run inline. Async handlers are awaited on the caller's
//! runner and suspend only where the handler itself awaits. Errors and panics
//! stop here and come back as [`CliError::HandlerFailure`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::error::{CliError, Result};
use crate::handler::Handler;
use crate::registry::Command;

/// Run `command` with the raw argument tokens that followed its name.
pub async fn execute(command: &Command, args: Vec<String>) -> Result<()> {
    debug!(
        command = command.name(),
        mode = command.handler().label(),
        args = args.len(),
        "executing command"
    );

    let outcome = match command.handler() {
        Handler::Sync(f) => panic::catch_unwind(AssertUnwindSafe(|| f(&args))),
        Handler::Async(f) => {
            let f = Arc::clone(f);
            AssertUnwindSafe(async move { f(args).await })
                .catch_unwind()
                .await
        }
    };

    let message = match outcome {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(err)) => format!("{err:#}"),
        Err(payload) => panic_message(payload.as_ref()),
    };

    warn!(command = command.name(), error = %message, "command failed");
    Err(CliError::HandlerFailure {
        command: command.name().to_string(),
        message,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
