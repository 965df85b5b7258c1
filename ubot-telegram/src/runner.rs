//! REPL runner: converts teloxide messages to core messages and feeds them into the single
//! dispatch loop.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::UserId;
use tracing::{debug, error, info, instrument};
use ubot_core::{ToCoreMessage, Transport};
use ubot_dispatch::{message_stream, run_dispatch_loop, EventHandler};

use crate::adapters::TelegramMessageWrapper;
use crate::transport::TelegramTransport;

/// Messages buffered between the REPL and the dispatch loop.
const STREAM_CAPACITY: usize = 256;

/// Runs the REPL until shutdown (Ctrl-C), then waits for queued messages to be dispatched.
///
/// Every text message is converted (messages from `owner` become outgoing) and queued; one
/// task dispatches them in arrival order so command callbacks never interleave.
#[instrument(skip(bot, handler))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler: Arc<EventHandler>,
    owner: Option<UserId>,
) -> Result<()> {
    let transport: Arc<dyn Transport> = Arc::new(TelegramTransport::connect(bot.clone()).await?);
    let (tx, rx) = message_stream(STREAM_CAPACITY);
    let dispatch_task = tokio::spawn(run_dispatch_loop(handler, transport, rx));

    info!(owner = ?owner.map(|o| o.0), "Listening for commands");

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        let tx = tx.clone();
        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
                return respond(());
            }
            let core_msg = TelegramMessageWrapper::new(&msg, owner).to_core();
            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                direction = ?core_msg.direction,
                "Received message"
            );
            if let Err(e) = tx.send(core_msg).await {
                error!(error = %e, "Dispatch loop gone, message dropped");
            }
            respond(())
        }
    })
    .await;

    let processed = dispatch_task.await?;
    info!(processed = processed, "Bot stopped");
    Ok(())
}
