//! Message Handler module for processing incoming Telegram messages

use tracing::{debug, info, warn};

use crate::bot_errors::BotError;
use crate::link_extraction::LinkExtractor;
use crate::link_store::LinkStore;
use crate::telegram_api::{Message, TelegramApi};

use super::ui_builder::{create_welcome_keyboard, format_link_report, WELCOME_TEXT};

/// Command that triggers the welcome message
pub const START_COMMAND: &str = "/start";

/// Handle one message update.
///
/// Routing, first matching rule wins: the start command gets the welcome
/// message with its inline button; any other non-empty text goes through the
/// link extractor. Messages yielding links are deleted best-effort and
/// confirmed with the count of links detected in them.
pub async fn handle_message(
    api: &TelegramApi,
    extractor: &LinkExtractor,
    store: &mut LinkStore,
    msg: &Message,
) -> Result<(), BotError> {
    let text = match msg.text.as_deref() {
        Some(text) => text,
        None => {
            debug!(chat_id = msg.chat.id, "Ignoring message without text");
            return Ok(());
        }
    };

    if text == START_COMMAND {
        debug!(chat_id = msg.chat.id, "Handling start command");
        return api
            .send_message(msg.chat.id, WELCOME_TEXT, Some(create_welcome_keyboard()))
            .await;
    }

    if text.is_empty() {
        return Ok(());
    }

    let links = extractor.extract(text);
    if links.is_empty() {
        // No links: the message is left untouched.
        debug!(chat_id = msg.chat.id, "No invite links in message");
        return Ok(());
    }

    let found = links.len();
    let mut accepted = 0usize;
    for link in links {
        if store.insert(link) {
            accepted += 1;
        }
    }

    info!(
        chat_id = msg.chat.id,
        found,
        accepted,
        total = store.len(),
        "Invite links processed"
    );

    // Cleanup is advisory; a failed delete must not block the confirmation.
    if let Err(e) = api.delete_message(msg.chat.id, msg.message_id).await {
        warn!(
            chat_id = msg.chat.id,
            message_id = msg.message_id,
            error = %e,
            "Failed to delete source message"
        );
    }

    // The confirmation reports detection, the store reflects dedup.
    api.send_message(msg.chat.id, &format_link_report(found), None)
        .await
}
