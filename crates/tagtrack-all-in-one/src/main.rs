mod config;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tagtrack_domain::{PresenceService, PresenceServiceConfig};
use tagtrack_handler::{DeviceSeenEvent, EventResponse, PresenceEventHandler};
use tagtrack_postgres::{PostgresClient, PostgresDeviceStateRepository};

#[tokio::main]
async fn main() {
    let config = match config::ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Starting tagtrack-all-in-one service");

    let token = CancellationToken::new();
    spawn_signal_watchers(token.clone());

    if let Err(e) = run_service(token, config).await {
        error!("Service error: {:#}", e);
        std::process::exit(1);
    }

    info!("Service stopped gracefully");
}

/// Cancels the token on SIGINT or SIGTERM so the event loop can drain
fn spawn_signal_watchers(token: CancellationToken) {
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal");
                ctrl_c_token.cancel();
            }
            Err(err) => {
                error!("Error setting up signal handler: {}", err);
            }
        }
    });

    #[cfg(unix)]
    tokio::spawn(async move {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM signal");
                token.cancel();
            }
            Err(err) => {
                error!("Error setting up SIGTERM handler: {}", err);
            }
        }
    });
}

/// Reads newline-delimited JSON events from stdin and writes one JSON
/// response per event to stdout
async fn run_service(ctx: CancellationToken, config: config::ServiceConfig) -> Result<()> {
    let client = PostgresClient::from_config(&config.postgres())?;
    client.ping().await?;

    let repository = Arc::new(PostgresDeviceStateRepository::new(client));
    let service = Arc::new(PresenceService::with_config(
        repository,
        PresenceServiceConfig {
            register_unknown_devices: config.register_unknown_devices,
        },
    ));
    let handler = PresenceEventHandler::new(service);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("Listening for events on stdin");

    loop {
        tokio::select! {
            _ = ctx.cancelled() => {
                info!("Received shutdown signal, stopping service");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("Event source closed");
                    break;
                };

                if line.trim().is_empty() {
                    continue;
                }

                let response = match serde_json::from_str::<DeviceSeenEvent>(&line) {
                    Ok(event) => handler.handle(event).await,
                    Err(e) => {
                        warn!(error = %e, "Discarding malformed event");
                        EventResponse::missing_parameters()
                    }
                };

                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
        }
    }

    Ok(())
}
