//! Event handler: binds matchers to callbacks and dispatches messages to every match.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, error, info, instrument};
use ubot_core::{Message, Transport};

use crate::error::DispatchError;
use crate::event::CommandEvent;
use crate::matcher::CommandMatcher;
use crate::spec::CommandSpec;

/// Callback bound to a command. Errors are caught and logged by [`EventHandler::dispatch`];
/// a callback reports known failures to the chat itself.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> CommandHandler for F
where
    F: Fn(CommandEvent) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn handle(&self, event: CommandEvent) -> anyhow::Result<()> {
        (self)(event).await
    }
}

struct Registration {
    matcher: CommandMatcher,
    callback: Arc<dyn CommandHandler>,
}

/// Outcome of dispatching one message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Callbacks whose predicate matched and that were invoked.
    pub matched: usize,
    /// Invoked callbacks that returned an error or panicked.
    pub failed: usize,
}

/// All registered commands, evaluated in registration order against every message.
pub struct EventHandler {
    prefix: String,
    registrations: Vec<Registration>,
}

impl EventHandler {
    /// Creates an empty handler for commands introduced by `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            registrations: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Registers `callback` for `spec`. Malformed specs are rejected here, never at dispatch.
    pub fn on<H>(&mut self, spec: CommandSpec, callback: H) -> Result<(), DispatchError>
    where
        H: CommandHandler + 'static,
    {
        let matcher = CommandMatcher::compile(&self.prefix, spec)?;
        self.add(matcher, Arc::new(callback));
        Ok(())
    }

    pub(crate) fn add(&mut self, matcher: CommandMatcher, callback: Arc<dyn CommandHandler>) {
        debug!(command = %matcher.name(), "Command registered");
        self.registrations.push(Registration { matcher, callback });
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.registrations.iter().any(|r| r.matcher.name() == name)
    }

    /// Registered command names in registration order (duplicates included).
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.registrations.iter().map(|r| r.matcher.name())
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Runs every callback whose predicate matches `message`, one after another.
    ///
    /// A failing callback (error or panic) is logged and does not stop the remaining
    /// callbacks or the caller's stream.
    #[instrument(
        skip(self, message, transport),
        fields(message_id = %message.id, chat_id = message.chat.id)
    )]
    pub async fn dispatch(
        &self,
        message: Message,
        transport: &Arc<dyn Transport>,
    ) -> DispatchReport {
        let mut report = DispatchReport::default();
        if !message.content.starts_with(&self.prefix) {
            return report;
        }
        let message = Arc::new(message);

        for registration in &self.registrations {
            let Some(args) = registration
                .matcher
                .evaluate(&message, transport.as_ref())
                .await
            else {
                continue;
            };
            let command = registration.matcher.name();
            report.matched += 1;
            info!(
                command = %command,
                user_id = message.user.id,
                args_len = args.len(),
                "step: command matched"
            );

            let event = CommandEvent::new(command, args, message.clone(), transport.clone());
            let outcome = AssertUnwindSafe(registration.callback.handle(event))
                .catch_unwind()
                .await;
            match outcome {
                Ok(Ok(())) => {
                    info!(command = %command, "step: command done");
                }
                Ok(Err(e)) => {
                    report.failed += 1;
                    error!(command = %command, error = ?e, "Command callback failed");
                }
                Err(panic) => {
                    report.failed += 1;
                    error!(
                        command = %command,
                        panic = %panic_message(panic.as_ref()),
                        "Command callback panicked"
                    );
                }
            }
        }

        report
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

// Dispatch behaviour is covered in tests/dispatch_test.rs
