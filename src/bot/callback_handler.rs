//! Callback Handler module for processing inline keyboard callback queries

use tracing::debug;

use crate::bot_errors::BotError;
use crate::telegram_api::{CallbackQuery, TelegramApi};

use super::ui_builder::CALLBACK_ACK_TEXT;

/// Acknowledge a callback query with the fixed transient notice.
///
/// Closing the interaction removes the loading state on the pressed button;
/// the payload itself triggers no further action.
pub async fn handle_callback(api: &TelegramApi, query: &CallbackQuery) -> Result<(), BotError> {
    debug!(user_id = query.from.id, data = ?query.data, "Received callback query");

    api.answer_callback_query(&query.id, CALLBACK_ACK_TEXT).await
}
