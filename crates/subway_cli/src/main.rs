//! Server entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the database.
//! - Serve the catalog until Ctrl-C.

mod config;

use anyhow::Context;
use clap::Parser;
use config::ServerConfig;
use log::{info, warn};
use subway_core::{init_logging, Database};
use subway_http::{serve, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let log_dir = config.log_dir();
    init_logging(config.log_level(), &log_dir)
        .with_context(|| format!("logging init failed for `{}`", log_dir.display()))?;

    let db_path = config.db_path();
    let db = Database::open(&db_path)
        .with_context(|| format!("database open failed for `{}`", db_path.display()))?;
    info!(
        "event=server_start module=cli status=ok db_path={} bind={}",
        db.path().display(),
        config.bind
    );

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind failed on {}", config.bind))?;
    serve(listener, AppState::new(db), shutdown_signal()).await?;

    info!("event=server_stop module=cli status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=cli status=error error={err}");
    }
}
