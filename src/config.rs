//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{GeoError, Result};

/// Interval between two runs of the background cache sweep.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

// == Lookup Mode ==
/// Which record shape is read from the database.
///
/// Fixed at startup and shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    #[default]
    City,
    Country,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::City => "city",
            LookupMode::Country => "country",
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "city" => Ok(LookupMode::City),
            "country" => Ok(LookupMode::Country),
            other => Err(GeoError::InvalidConfig(format!(
                "lookup parameter should be either 'city', or 'country', it is '{}'",
                other
            ))),
        }
    }
}

// == Config ==
/// Server configuration parameters.
///
/// Everything except the lookup mode falls back to a sensible default when the
/// variable is missing or unparsable.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the MaxMind GeoIP2 / GeoLite2 database
    pub database_path: String,
    /// Record shape to look up
    pub lookup: LookupMode,
    /// Listen address and port
    pub listen: String,
    /// Number of tokio worker threads
    pub threads: usize,
    /// Indent JSON output
    pub pretty: bool,
    /// Cache TTL in seconds, 0 disables caching
    pub cache_ttl: u64,
    /// Background sweep interval (not read from the environment)
    pub sweep_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE` - Database file (default: GeoLite2-City.mmdb)
    /// - `LOOKUP` - `city` or `country` (default: city)
    /// - `LISTEN` - Listen address (default: 0.0.0.0:5000)
    /// - `THREADS` - Worker threads (default: number of cores)
    /// - `PRETTY` - Indent output (default: false)
    /// - `CACHE_TTL` - Cache TTL in seconds, 0 disables (default: 60)
    pub fn from_env() -> Result<Self> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_source<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let lookup = match var("LOOKUP") {
            Some(value) => value.parse()?,
            None => defaults.lookup,
        };

        Ok(Self {
            database_path: var("DATABASE").unwrap_or(defaults.database_path),
            lookup,
            listen: var("LISTEN").unwrap_or(defaults.listen),
            threads: var("THREADS")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.threads),
            pretty: var("PRETTY")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.pretty),
            cache_ttl: var("CACHE_TTL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            sweep_interval: defaults.sweep_interval,
        })
    }

    /// Returns the cache TTL, or None when caching is disabled.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl > 0).then(|| Duration::from_secs(self.cache_ttl))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "GeoLite2-City.mmdb".to_string(),
            lookup: LookupMode::City,
            listen: "0.0.0.0:5000".to_string(),
            threads: default_threads(),
            pretty: false,
            cache_ttl: 60,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
