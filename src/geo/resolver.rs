//! Geo Resolver Port
//!
//! Defines the interface for resolving IP addresses to geographic records.

use std::net::IpAddr;

use thiserror::Error;

use crate::config::LookupMode;
use crate::geo::GeoRecord;

/// Why a resolver produced no record.
///
/// Both variants end up verbatim in the `Error` field of a normal response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The database has no record for the address
    #[error("{0}")]
    NotFound(String),

    /// Any other lookup-time failure
    #[error("{0}")]
    Lookup(String),
}

/// Resolver for IP address to geographic record.
///
/// Implementations are synchronous and expected to be quick (an in-memory
/// database walk), so they are called directly from request tasks.
pub trait GeoResolver: Send + Sync {
    /// Looks up `ip`, returning a record shaped after `mode`.
    fn resolve(&self, ip: IpAddr, mode: LookupMode) -> Result<GeoRecord, ResolveError>;
}
