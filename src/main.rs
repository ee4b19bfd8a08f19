//! Marine simulation engine
//!
//! Reads newline-delimited JSON requests from stdin and writes one JSON
//! response per line to stdout.

use chrono::Utc;
use marine_sim::{config::AppConfig, errors::MarineError, service::Engine};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), MarineError> {
    // Logs go to stderr, stdout carries responses
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let engine = Engine::from_config(&config);

    let shutdown_signal = signal::ctrl_c();

    tokio::select! {
        result = run_engine(engine) => {
            info!("Marine engine completed: {:?}", result);
        }
        _ = shutdown_signal => {
            info!("Received shutdown signal");
        }
    }

    Ok(())
}

async fn run_engine(mut engine: Engine) -> Result<(), MarineError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                let mut response = engine.handle_line(&line, Utc::now());
                response.push('\n');
                stdout.write_all(response.as_bytes()).await?;
                stdout.flush().await?;
            }
            Ok(None) => break, // EOF
            Err(e) => {
                error!("Input read error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
