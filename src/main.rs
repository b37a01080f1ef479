// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Smart-watch dashboard API server
//!
//! Loads the activity dataset once and serves dashboard queries over HTTP.

use smartwatch_dashboard::{config::Config, services::Dataset, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;
    tracing::info!(port = config.port, "Starting smart-watch dashboard API");

    // The server never starts with a partial dataset
    tracing::info!(path = %config.data_path.display(), "Loading activity dataset");
    let dataset = Dataset::load_from_file(&config.data_path).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load activity dataset");
    })?;
    if let Some((first, last)) = dataset.date_bounds() {
        tracing::info!(
            records = dataset.len(),
            users = dataset.user_ids().len(),
            first = %first,
            last = %last,
            "Activity dataset ready"
        );
    } else {
        tracing::warn!("Activity dataset is empty");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        dataset,
    });

    let app = smartwatch_dashboard::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), tracing_subscriber::filter::ParseError> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("smartwatch_dashboard=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
