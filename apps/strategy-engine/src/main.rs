//! Strategy Engine Binary
//!
//! Validates a strategy draft and submits it to an in-memory store.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin strategy-engine -- draft.json
//! ```
//!
//! The draft file holds a strategy payload:
//! `{name, ticker, instrument_type, legs: [...]}`. On success the stored
//! strategy is printed as JSON. On failure the error response is printed and
//! the process exits non-zero.
//!
//! # Environment Variables
//!
//! - `STRATEGY_ENGINE_CONFIG`: Config file path (default: config.yaml)
//! - `RUST_LOG`: Log filter (default: `observability.logging.level`)

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use strategy_engine::application::use_cases::{LoadStrategiesUseCase, SubmitStrategyUseCase};
use strategy_engine::config::{Config, load_config};
use strategy_engine::domain::shared::OwnerId;
use strategy_engine::domain::strategy_definition::{StoredStrategy, StrategyError, StrategyPayload};
use strategy_engine::error::ErrorResponse;
use strategy_engine::infrastructure::persistence::InMemoryStrategyStore;
use strategy_engine::telemetry::init_tracing;

/// Exit code for bad command-line usage.
const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let Some(draft_path) = std::env::args().nth(1) else {
        eprintln!("usage: strategy-engine <draft.json>");
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    };

    let config = load_config(None).context("failed to load configuration")?;
    init_tracing(&config.observability.logging).context("failed to initialize tracing")?;

    tracing::info!(
        draft = %draft_path,
        owner_id = %config.store.owner_id,
        "Starting Strategy Engine"
    );

    let contents = std::fs::read_to_string(&draft_path)
        .with_context(|| format!("failed to read draft file '{draft_path}'"))?;

    let store = Arc::new(InMemoryStrategyStore::new(OwnerId::new(
        &config.store.owner_id,
    )));

    match submit(&config, &store, &contents).await {
        Ok(stored) => {
            log_summaries(&config, &store).await;
            println!("{}", serde_json::to_string_pretty(&stored)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(error = %e, "Strategy submission failed");
            let response = ErrorResponse::from(&e);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Decode the draft, hydrate it and submit it.
async fn submit(
    config: &Config,
    store: &Arc<InMemoryStrategyStore>,
    contents: &str,
) -> Result<StoredStrategy, StrategyError> {
    let draft =
        StrategyPayload::from_json(contents)?.to_draft_with(config.leg_defaults.clone())?;
    SubmitStrategyUseCase::new(Arc::clone(store))
        .execute(&draft)
        .await
}

async fn log_summaries(config: &Config, store: &Arc<InMemoryStrategyStore>) {
    let loader =
        LoadStrategiesUseCase::new(Arc::clone(store)).with_leg_defaults(config.leg_defaults.clone());
    match loader.summaries().await {
        Ok(rows) => {
            for row in rows {
                tracing::info!(
                    strategy_id = %row.id,
                    name = %row.display_name,
                    ticker = %row.ticker,
                    instrument_type = %row.instrument_type,
                    legs = %row.legs_label(),
                    "Stored strategy"
                );
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to list strategies"),
    }
}
