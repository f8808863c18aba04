use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use invitelinks::bot::UpdateDispatcher;
use invitelinks::bot_config::BotConfig;
use invitelinks::bot_errors::BotError;
use invitelinks::polling::Poller;
use invitelinks::telegram_api::{TelegramApi, Transport};

/// Minimal scripted transport: getUpdates works through a queue of results
/// and then returns empty batches; everything else succeeds.
struct ScriptedTransport {
    batches: Mutex<VecDeque<Result<Value, BotError>>>,
    fetch_count: AtomicUsize,
}

impl ScriptedTransport {
    fn new(batches: Vec<Result<Value, BotError>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
            fetch_count: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(&self, method: &str, _body: Value) -> Result<Value, BotError> {
        if method == "getUpdates" {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            return self
                .batches
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(json!([])));
        }
        Ok(json!({}))
    }
}

fn test_config() -> BotConfig {
    BotConfig {
        bot_token: "test-token".to_string(),
        poll_interval_ms: 10,
        error_cooldown_secs: 0,
        long_poll_timeout_secs: 1,
    }
}

fn link_batch(update_id: i64, text: &str) -> Value {
    json!([{
        "update_id": update_id,
        "message": {
            "message_id": 100,
            "from": { "id": 11, "first_name": "Op" },
            "chat": { "id": 10 },
            "text": text,
        },
    }])
}

#[tokio::test]
async fn test_poller_dispatches_batches_until_cancelled() {
    let transport = Arc::new(ScriptedTransport::new(vec![Ok(link_batch(
        1,
        "join t.me/night_owls",
    ))]));
    let api = TelegramApi::new(transport.clone(), 1);
    let mut poller = Poller::new(api, UpdateDispatcher::new(), &test_config());

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    poller.run(cancel).await;

    let store = poller.dispatcher().store();
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].url, "t.me/night_owls");
}

#[tokio::test]
async fn test_poller_recovers_after_a_failed_fetch() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        Err(BotError::Transport("connection refused".to_string())),
        Ok(link_batch(2, "t.me/+AbC123")),
    ]));
    let api = TelegramApi::new(transport.clone(), 1);
    let mut poller = Poller::new(api, UpdateDispatcher::new(), &test_config());

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        canceller.cancel();
    });

    poller.run(cancel).await;

    assert_eq!(poller.dispatcher().store().len(), 1);
}

#[tokio::test]
async fn test_poller_stops_immediately_on_a_cancelled_token() {
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let api = TelegramApi::new(transport.clone(), 1);
    let mut poller = Poller::new(api, UpdateDispatcher::new(), &test_config());

    let cancel = CancellationToken::new();
    cancel.cancel();

    poller.run(cancel).await;

    assert_eq!(transport.fetch_count.load(Ordering::SeqCst), 0);
}
