use anyhow::Result;
use log::info;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use invitelinks::bot::UpdateDispatcher;
use invitelinks::bot_config::BotConfig;
use invitelinks::polling::Poller;
use invitelinks::telegram_api::{HttpTransport, TelegramApi};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the subscriber's log bridge also captures `log` records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    info!("Starting invite link collector bot");

    let config = BotConfig::from_env()?;

    let transport = Arc::new(HttpTransport::new(&config.bot_token)?);
    let api = TelegramApi::new(transport, config.long_poll_timeout_secs);

    // Validate the credential before entering the polling loop
    let me = api.verify_identity().await?;
    info!(
        "Authorized as {} (@{})",
        me.first_name,
        me.username.as_deref().unwrap_or("-")
    );

    // Ctrl-C requests a cooperative stop at the next loop boundary
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            signal_cancel.cancel();
        }
    });

    let mut poller = Poller::new(api, UpdateDispatcher::new(), &config);
    poller.run(cancel).await;

    let store = poller.dispatcher().store();
    if store.is_empty() {
        info!("No invite links collected this session");
    } else {
        info!(
            "Collected {} invite links this session:\n{}",
            store.len(),
            store.render_export()
        );
    }

    Ok(())
}
