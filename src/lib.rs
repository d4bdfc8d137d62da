//! GeoIP Server - HTTP GeoIP lookups with an in-memory response cache
//!
//! Resolves IP addresses against a MaxMind database and caches the
//! serialized answers for a configurable time window.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod geo;
pub mod lookup;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
