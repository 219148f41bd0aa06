//! HTTP server entry point.
//!
//! ```text
//! rolodex [CONFIG.toml]
//! ```
//!
//! # Startup
//!
//! 1. **Config**: read the optional TOML file, apply `ROLODEX_*` overrides
//! 2. **Tracing**: install the stderr and optional file exporters
//! 3. **Store**: open the JSON file or an in-memory store
//! 4. **Serve**: bind the listener and run the axum router until Ctrl+C
//!
//! On shutdown the store is dropped, which flushes unsaved JSON changes.

#![allow(clippy::multiple_crate_versions)]

use rolodex::observability::init_tracing;
use rolodex::{initialize, router, Config};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rolodex stopped");
            eprintln!("rolodex: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> rolodex::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    init_tracing(&config)?;

    tracing::debug!(?config, "configuration loaded");

    let state = initialize(&config)?;
    let app = router(state);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
