mod client;
mod config;
mod models;
mod session;
mod types;
mod ui;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::client::HttpPredictionService;
use crate::config::{Config, USAGE};
use crate::session::{FormEvent, FormSession};

const INPUT_BACKPRESSURE: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let service = Arc::new(HttpPredictionService::new(&config)?);
    info!("Predictions will be requested from [{}]", service.endpoint());

    let (sender, receiver) = mpsc::channel::<FormEvent>(INPUT_BACKPRESSURE);
    let input_handle = ui::spawn_input_reader(tokio::io::stdin(), sender);

    let mut session = FormSession::new(service, BufWriter::new(stdout()));
    session.run(receiver).await?;

    match session.outcome() {
        Some(outcome) => info!("Session closed, last prediction: {outcome}"),
        None => info!("Session closed without a prediction")
    }

    if let Err(error) = input_handle.await {
        error!("Form input reader failed: {error}");
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the form itself, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
