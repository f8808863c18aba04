//! Update Dispatcher module routing fetched update batches to their handlers

use tracing::{error, trace};

use crate::bot_errors::BotError;
use crate::link_extraction::LinkExtractor;
use crate::link_store::LinkStore;
use crate::telegram_api::{TelegramApi, Update};

use super::callback_handler::handle_callback;
use super::message_handler::handle_message;

/// Routes each update of a batch and owns the session's link store
pub struct UpdateDispatcher {
    extractor: LinkExtractor,
    store: LinkStore,
}

impl UpdateDispatcher {
    pub fn new() -> Self {
        Self {
            extractor: LinkExtractor::new(),
            store: LinkStore::new(),
        }
    }

    /// Accumulated links, for display and export
    pub fn store(&self) -> &LinkStore {
        &self.store
    }

    /// Operator-initiated reset of the accumulated links
    pub fn clear_store(&mut self) {
        self.store.clear();
    }

    /// Process a batch strictly in delivery order.
    ///
    /// Each update's side effects complete before the next update is looked
    /// at. A failure while handling one update is logged and the remaining
    /// updates are still processed: the cursor already advanced past the
    /// whole batch, so aborting here would silently drop them.
    pub async fn dispatch(&mut self, api: &TelegramApi, batch: &[Update]) {
        for update in batch {
            if let Err(e) = self.dispatch_update(api, update).await {
                error!(update_id = update.update_id, error = %e, "Update handling failed");
            }
        }
    }

    async fn dispatch_update(&mut self, api: &TelegramApi, update: &Update) -> Result<(), BotError> {
        // First matching rule wins.
        if let Some(query) = &update.callback_query {
            return handle_callback(api, query).await;
        }

        if let Some(message) = &update.message {
            return handle_message(api, &self.extractor, &mut self.store, message).await;
        }

        trace!(update_id = update.update_id, "Ignoring update of unknown shape");
        Ok(())
    }
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
