#![doc = include_str!("../README.md")]

mod app;

use app::config::{CliArgs, PickerConfig};
use app::items::load_items;
use app::output::Output;
use app::telemetry::init_telemetry;
use app::trigger::run;
use clap::Parser;
use tokio::signal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = PickerConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let items = load_items(&config.items)?;
    let mut output = Output::new(config.format, std::io::stdout());

    let shown = run(&config, &items, &mut output, shutdown_signal()).await?;
    tracing::debug!(shown, "Done");

    Ok(())
}

fn log_startup_info(config: &PickerConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting quotepick with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Starting quotepick: {} pick(s), seeded: {}",
            config.count,
            config.seed.is_some()
        );
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
