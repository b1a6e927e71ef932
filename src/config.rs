//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Parsing goes through
//! [`ListingsConfig::from_lookup`] so any key source can be used.

use std::net::SocketAddr;
use std::time::Duration;

use crate::filters::{EmptyValuePolicy, ValidationPolicy};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Fatal configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is set but is not a socket address.
    #[error("invalid LISTEN_ADDR '{value}': {source}")]
    ListenAddr {
        /// Raw value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },

    /// `FILTER_EMPTY_VALUES` is set to an unknown policy.
    #[error("invalid FILTER_EMPTY_VALUES: {0}")]
    EmptyValuePolicy(String),
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ListingsConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string.
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for opening or acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Timeout in seconds for a single data-store call.
    pub query_timeout_secs: u64,

    /// Timeout in seconds for a whole HTTP request.
    pub request_timeout_secs: u64,

    /// Validation policy applied to HTTP requests.
    pub filter_policy: ValidationPolicy,

    /// Log output format.
    pub log_format: LogFormat,
}

impl ListingsConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `LISTEN_ADDR` or
    /// `FILTER_EMPTY_VALUES` is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Falls back to defaults when a key is missing; numeric keys also fall
    /// back when their value does not parse.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `LISTEN_ADDR` or
    /// `FILTER_EMPTY_VALUES` is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let listen_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::ListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://listings.db".to_string());

        let empty_values = match lookup("FILTER_EMPTY_VALUES") {
            Some(raw) => raw
                .parse::<EmptyValuePolicy>()
                .map_err(ConfigError::EmptyValuePolicy)?,
            None => EmptyValuePolicy::Reject,
        };
        let require_filter = parse_bool(&lookup, "FILTER_REQUIRE_AT_LEAST_ONE", true);

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            database_min_connections: parse(&lookup, "DATABASE_MIN_CONNECTIONS", 1),
            database_connect_timeout_secs: parse(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 5),
            query_timeout_secs: parse(&lookup, "QUERY_TIMEOUT_SECS", 10),
            request_timeout_secs: parse(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            filter_policy: ValidationPolicy {
                empty_values,
                require_filter,
            },
            log_format,
        })
    }

    /// Data-store call timeout.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Whole-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parses a key as `T`, returning `default` on missing or invalid values.
fn parse<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses a key as a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
