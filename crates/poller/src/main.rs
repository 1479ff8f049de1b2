use tracing_subscriber::EnvFilter;

use homework_common::config::BotConfig;
use homework_notifier::{TelegramNotifier, deliver};
use homework_poller::{PollLoop, PracticumClient};

const STARTUP_MESSAGE: &str = "Бот включен";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("homework_poller=debug,homework_engine=debug,homework_notifier=info")
        }))
        .init();

    // Load configuration; without all three secrets nothing can be polled or sent
    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(critical = true, error = %e, "Missing critical environment variable");
            std::process::exit(1);
        }
    };

    let notifier = TelegramNotifier::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );
    let source = PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout,
    )?;

    deliver(&notifier, STARTUP_MESSAGE).await;

    let mut poll_loop = PollLoop::new(source, notifier, config.retry_time);

    tokio::select! {
        _ = poll_loop.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework poller stopped.");
    Ok(())
}
