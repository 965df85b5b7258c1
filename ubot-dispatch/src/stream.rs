//! The single inbound message stream and the loop that drains it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, instrument};
use ubot_core::{Message, Transport};

use crate::handler::EventHandler;

/// Producer side of the message stream (held by the transport runner).
pub type MessageSender = mpsc::Sender<Message>;

/// Consumer side of the message stream (drained by [`run_dispatch_loop`]).
pub type MessageStream = mpsc::Receiver<Message>;

/// Creates a bounded message stream.
pub fn message_stream(capacity: usize) -> (MessageSender, MessageStream) {
    mpsc::channel(capacity)
}

/// Dispatches messages one at a time until every sender is dropped.
///
/// Each message's callbacks complete before the next message is taken, so callbacks never
/// interleave. Returns the number of messages processed.
#[instrument(skip_all)]
pub async fn run_dispatch_loop(
    handler: Arc<EventHandler>,
    transport: Arc<dyn Transport>,
    mut stream: MessageStream,
) -> usize {
    let mut processed = 0;
    while let Some(message) = stream.recv().await {
        let report = handler.dispatch(message, &transport).await;
        processed += 1;
        if report.failed > 0 {
            info!(
                matched = report.matched,
                failed = report.failed,
                "step: message dispatched with failures"
            );
        }
    }
    info!(processed = processed, "Message stream closed, dispatch loop stopped");
    processed
}
