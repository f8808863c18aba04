//! # Polling Loop Module
//!
//! Drives the session: fetch a batch, dispatch it to completion, sleep the
//! fixed inter-poll delay, repeat. A transport failure is logged and followed
//! by a longer cooldown so a persistently unreachable endpoint is not hammered
//! in a tight loop; there is no retry limit. The loop is the single logical
//! thread of control: the network calls and the sleeps are its only
//! suspension points, which is what keeps the cursor and the store free of
//! locks.

use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::bot::UpdateDispatcher;
use crate::bot_config::BotConfig;
use crate::telegram_api::TelegramApi;

/// Owns the API client and dispatcher for one bot session
pub struct Poller {
    api: TelegramApi,
    dispatcher: UpdateDispatcher,
    poll_interval: Duration,
    error_cooldown: Duration,
}

impl Poller {
    pub fn new(api: TelegramApi, dispatcher: UpdateDispatcher, config: &BotConfig) -> Self {
        Self {
            api,
            dispatcher,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            error_cooldown: Duration::from_secs(config.error_cooldown_secs),
        }
    }

    /// The session's dispatcher, for reading the accumulated links
    pub fn dispatcher(&self) -> &UpdateDispatcher {
        &self.dispatcher
    }

    /// Poll until the token is cancelled.
    ///
    /// Cancellation is cooperative and checked once per iteration, at the
    /// loop boundary: an in-flight long poll is not aborted and a batch being
    /// dispatched always completes, so stopping costs at most one extra
    /// fetch/timeout interval.
    pub async fn run(&mut self, cancel: CancellationToken) {
        info!("Polling loop started");

        while !cancel.is_cancelled() {
            match self.api.fetch_updates().await {
                Ok(batch) => {
                    if !batch.is_empty() {
                        debug!(count = batch.len(), "Dispatching update batch");
                        self.dispatcher.dispatch(&self.api, &batch).await;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Fetching updates failed, cooling down");
                    sleep(self.error_cooldown).await;
                }
            }

            sleep(self.poll_interval).await;
        }

        info!("Polling loop stopped");
    }
}
