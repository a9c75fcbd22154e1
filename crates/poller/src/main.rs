use hwbot_common::config::AppConfig;
use hwbot_notifier::TelegramNotifier;
use hwbot_poller::api::HomeworkApiClient;
use hwbot_poller::poller::HomeworkPoller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbot_poller=debug,hwbot_notifier=debug".into()),
        )
        .json()
        .init();

    tracing::info!("Homework bot starting...");

    // Missing credentials are the only fatal condition
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) if e.is_fatal() => {
            tracing::error!(error = %e, "Startup aborted: invalid configuration");
            return Err(e.into());
        }
        Err(e) => {
            tracing::error!(error = %e, "Unexpected error while loading configuration");
            return Err(e.into());
        }
    };

    let client = HomeworkApiClient::from_config(&config)?;
    let notifier = TelegramNotifier::from_config(&config)?;
    let mut poller = HomeworkPoller::new(client, notifier, config.retry_period);

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework bot stopped.");
    Ok(())
}
