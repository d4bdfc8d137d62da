//! In-memory geo resolver.
//!
//! Fixed address table behind the GeoResolver trait, for running the
//! service without a database file.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::LookupMode;
use crate::geo::{GeoRecord, GeoResolver, ResolveError};

/// Message used when an address has no entry, matching the database wording.
pub const NOT_FOUND_MESSAGE: &str = "AddressNotFoundError: Address not found in database";

/// Resolver answering from a fixed address table.
///
/// The lookup mode is ignored; records are returned exactly as inserted.
/// Every call is counted so callers can tell hits from misses.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    records: HashMap<IpAddr, GeoRecord>,
    failures: HashMap<IpAddr, String>,
    calls: AtomicUsize,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record for `ip`.
    pub fn with_record(mut self, ip: IpAddr, record: impl Into<GeoRecord>) -> Self {
        self.records.insert(ip, record.into());
        self
    }

    /// Makes lookups of `ip` fail with a generic lookup error.
    pub fn with_failure(mut self, ip: IpAddr, message: impl Into<String>) -> Self {
        self.failures.insert(ip, message.into());
        self
    }

    /// Number of resolve calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeoResolver for MemoryResolver {
    fn resolve(&self, ip: IpAddr, _mode: LookupMode) -> Result<GeoRecord, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failures.get(&ip) {
            return Err(ResolveError::Lookup(message.clone()));
        }
        self.records
            .get(&ip)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::CountryRecord;

    #[test]
    fn test_memory_resolver_lookup() {
        let ip: IpAddr = "8.8.8.8".parse().unwrap();
        let resolver = MemoryResolver::new().with_record(ip, CountryRecord::default());

        assert!(resolver.resolve(ip, LookupMode::Country).is_ok());
        assert_eq!(
            resolver.resolve("9.9.9.9".parse().unwrap(), LookupMode::Country),
            Err(ResolveError::NotFound(NOT_FOUND_MESSAGE.to_string()))
        );
        assert_eq!(resolver.calls(), 2);
    }

    #[test]
    fn test_memory_resolver_failure() {
        let ip: IpAddr = "10.0.0.1".parse().unwrap();
        let resolver = MemoryResolver::new().with_failure(ip, "corrupt search tree");

        assert_eq!(
            resolver.resolve(ip, LookupMode::City),
            Err(ResolveError::Lookup("corrupt search tree".to_string()))
        );
    }
}
