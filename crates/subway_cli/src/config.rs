//! Server configuration from flags and environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

const DB_FILE_NAME: &str = "subway.sqlite3";
const LOG_DIR_NAME: &str = "subway-logs";

/// Subway line catalog HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "subway", version)]
pub struct ServerConfig {
    /// SQLite database file; `:memory:` keeps everything in memory.
    #[arg(long, env = "SUBWAY_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Listen address.
    #[arg(long, env = "SUBWAY_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// trace|debug|info|warn|error; defaults per build mode.
    #[arg(long, env = "SUBWAY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "SUBWAY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
    }

    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or_else(|| subway_core::default_log_level())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME))
    }
}
