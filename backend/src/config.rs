//! Application settings loaded via OrthoConfig.
//!
//! Values come from `COURSEDESK_*` environment variables or the matching
//! command-line flags (`--database-path`, `--bind-addr`, `--bcrypt-cost`,
//! `--in-memory`).

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// SQLite file used when no path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "database.db";
/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Startup configuration for the web application.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSEDESK")]
pub struct AppSettings {
    /// SQLite database file, created on first start.
    pub database_path: Option<String>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// bcrypt cost factor for new password digests.
    pub bcrypt_cost: Option<u32>,
    /// Keep students and courses in process memory instead of SQLite.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl AppSettings {
    /// Configured database path, falling back to [`DEFAULT_DATABASE_PATH`].
    pub fn database_path(&self) -> &str {
        self.database_path
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Parsed listen address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Configured bcrypt cost, falling back to `bcrypt::DEFAULT_COST`.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST)
    }
}
