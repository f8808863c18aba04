//! # Telegram API Module
//!
//! Thin client for the Bot API methods the pipeline needs: identity check,
//! long-poll fetch with cursor tracking, message send, message delete and
//! callback acknowledgment. Raw HTTP lives behind the [`Transport`] trait so
//! tests can substitute a scripted transport; the production transport POSTs
//! JSON to `https://api.telegram.org/bot<token>/<method>` and trusts the
//! `ok`/`result`/`description` envelope of every response.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::bot_errors::BotError;

/// Client-side HTTP timeout; must stay above the long-poll hold time
const HTTP_TIMEOUT_SECS: u64 = 60;

// ── Wire types (subset of fields we need) ───────────────────────

/// One event from the Bot API update feed
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonically increasing identifier, used only to advance the cursor
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

/// An incoming chat message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A user's interaction with an inline keyboard button
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Opaque payload attached to the pressed button
    #[serde(default)]
    pub data: Option<String>,
    /// Message the button was attached to, when still available
    #[serde(default)]
    pub message: Option<Message>,
}

/// The bot's self-description returned by `getMe`
#[derive(Debug, Clone, Deserialize)]
pub struct BotProfile {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Response envelope shared by every Bot API method
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    description: Option<String>,
}

// ── Transport seam ──────────────────────────────────────────────

/// Request/response primitive the API client delegates to.
///
/// Given a Bot API method name and a JSON body, returns the `result` payload
/// of a successful response or fails with [`BotError::Transport`]. The client
/// never performs raw network I/O itself.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, body: Value) -> Result<Value, BotError>;
}

/// Production transport backed by a shared reqwest client
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(bot_token: &str) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("https://api.telegram.org/bot{bot_token}"),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, body: Value) -> Result<Value, BotError> {
        let url = format!("{}/{}", self.base_url, method);

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        // The API reports failures inside the JSON envelope, with a matching
        // non-2xx status; a body that does not parse is a transport failure.
        let parsed: ApiResponse = response.json().await.map_err(|e| {
            BotError::Transport(format!("{method} returned HTTP {status}: {e}"))
        })?;

        if !parsed.ok {
            return Err(BotError::Transport(format!(
                "{method} returned ok=false: {}",
                parsed.description.unwrap_or_default()
            )));
        }

        Ok(parsed.result.unwrap_or(Value::Null))
    }
}

// ── API client ──────────────────────────────────────────────────

/// Bot API client owning the update cursor
pub struct TelegramApi {
    transport: Arc<dyn Transport>,
    /// Smallest unacknowledged update id; advances only on a successful fetch
    offset: i64,
    long_poll_timeout_secs: u64,
}

impl TelegramApi {
    pub fn new(transport: Arc<dyn Transport>, long_poll_timeout_secs: u64) -> Self {
        Self {
            transport,
            offset: 0,
            long_poll_timeout_secs,
        }
    }

    /// Current cursor value (the offset the next fetch will request)
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Validate the credential by asking the API who this bot is.
    ///
    /// Called once before the polling loop starts; every failure here is a
    /// credential failure as far as the caller is concerned.
    pub async fn verify_identity(&self) -> Result<BotProfile, BotError> {
        let result = self
            .transport
            .call("getMe", json!({}))
            .await
            .map_err(|e| BotError::Credential(e.to_string()))?;

        serde_json::from_value(result)
            .map_err(|e| BotError::Credential(format!("Unexpected getMe payload: {e}")))
    }

    /// Long-poll for the next batch of updates.
    ///
    /// Requests `offset = cursor` and blocks server-side up to the configured
    /// timeout. On success the cursor moves to (max update_id in batch) + 1,
    /// so each update id is delivered exactly once across calls; an empty
    /// batch is not an error and leaves the cursor unchanged.
    pub async fn fetch_updates(&mut self) -> Result<Vec<Update>, BotError> {
        let body = json!({
            "offset": self.offset,
            "timeout": self.long_poll_timeout_secs,
            "allowed_updates": ["message", "callback_query"],
        });

        let result = self.transport.call("getUpdates", body).await?;
        let updates: Vec<Update> = serde_json::from_value(result)?;

        if let Some(max_id) = updates.iter().map(|u| u.update_id).max() {
            self.offset = max_id + 1;
            debug!(offset = self.offset, count = updates.len(), "Cursor advanced");
        }

        Ok(updates)
    }

    /// Send a text message, optionally with an inline keyboard.
    ///
    /// The reply markup is passed through to the remote client as-is; nothing
    /// in it is interpreted locally.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<Value>,
    ) -> Result<(), BotError> {
        let mut body = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(markup) = reply_markup {
            body["reply_markup"] = markup;
        }

        self.transport.call("sendMessage", body).await?;
        Ok(())
    }

    /// Best-effort removal of a previously seen message.
    ///
    /// Failures (e.g. missing delete permission in the chat) come back as
    /// [`BotError::Action`] so the caller can log and move on.
    pub async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), BotError> {
        let body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
        });

        self.transport
            .call("deleteMessage", body)
            .await
            .map_err(|e| BotError::Action(e.to_string()))?;
        Ok(())
    }

    /// Close a pending callback interaction with a transient notice
    pub async fn answer_callback_query(
        &self,
        callback_id: &str,
        text: &str,
    ) -> Result<(), BotError> {
        let body = json!({
            "callback_query_id": callback_id,
            "text": text,
        });

        self.transport.call("answerCallbackQuery", body).await?;
        Ok(())
    }
}
