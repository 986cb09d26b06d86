//! Server configuration
//!
//! All settings come from the environment, with sane development defaults.

use chrono::Duration;

/// Which implementation backs the table/order/catalog stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Embedded SurrealDB (RocksDB) under `WORK_DIR`
    Surreal,
    /// Volatile in-memory store; for development and tests only
    Memory,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3001 | HTTP API port |
/// | FRONTEND_URL | http://localhost:5173 | Redirect target after a QR scan |
/// | SESSION_TTL_SECS | 7200 | Ticket time-to-live in seconds (2 hours) |
/// | STORE_BACKEND | surreal | `surreal` or `memory` |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/kedai HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database files and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Front-end base URL the scan endpoint redirects to
    pub frontend_url: String,
    /// Ticket time-to-live in seconds
    pub session_ttl_secs: i64,
    /// Store backend selection
    pub store_backend: StoreBackend,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(2 * 60 * 60),
            store_backend: match std::env::var("STORE_BACKEND").as_deref() {
                Ok("memory") => StoreBackend::Memory,
                _ => StoreBackend::Surreal,
            },
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Ticket time-to-live as a duration
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs)
    }

    pub fn db_path(&self) -> String {
        format!("{}/db", self.work_dir)
    }

    pub fn log_dir(&self) -> String {
        format!("{}/logs", self.work_dir)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
