//! MaxMind GeoIP Resolver
//!
//! Implements GeoResolver on top of a MaxMind GeoIP2 / GeoLite2 database file.

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use maxminddb::{MaxMindDBError, Reader};
use tracing::warn;

use crate::config::LookupMode;
use crate::error::Result;
use crate::geo::{CityRecord, CountryRecord, GeoRecord, GeoResolver, ResolveError};

/// MaxMind database resolver.
///
/// The reader is opened once and shared for the lifetime of the process.
#[derive(Clone)]
pub struct MaxMindResolver {
    reader: Arc<Reader<Vec<u8>>>,
}

impl MaxMindResolver {
    /// Opens a database file. Fails if the file is missing or not a valid
    /// MaxMind database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self {
            reader: Arc::new(reader),
        })
    }

    /// Database type from the file metadata, e.g. `GeoLite2-City`.
    pub fn database_type(&self) -> &str {
        &self.reader.metadata.database_type
    }

    /// Build time of the database as a Unix timestamp.
    pub fn build_epoch(&self) -> u64 {
        self.reader.metadata.build_epoch
    }

    /// Warns when the database does not look like it serves `mode`.
    ///
    /// Country lookups work against city databases, but a country database
    /// has no city data, so every city lookup would come back empty.
    pub fn check_mode(&self, mode: LookupMode) -> bool {
        let matches = database_supports(self.database_type(), mode);
        if !matches {
            warn!(
                "database type '{}' may not support '{}' lookups",
                self.database_type(),
                mode
            );
        }
        matches
    }
}

impl GeoResolver for MaxMindResolver {
    fn resolve(&self, ip: IpAddr, mode: LookupMode) -> std::result::Result<GeoRecord, ResolveError> {
        let record = match mode {
            LookupMode::City => self
                .reader
                .lookup::<CityRecord>(ip)
                .map(GeoRecord::City),
            LookupMode::Country => self
                .reader
                .lookup::<CountryRecord>(ip)
                .map(GeoRecord::Country),
        };
        record.map_err(resolve_error)
    }
}

fn resolve_error(err: MaxMindDBError) -> ResolveError {
    match err {
        MaxMindDBError::AddressNotFoundError(_) => ResolveError::NotFound(err.to_string()),
        other => ResolveError::Lookup(other.to_string()),
    }
}

fn database_supports(database_type: &str, mode: LookupMode) -> bool {
    match mode {
        LookupMode::City => database_type.contains("City"),
        LookupMode::Country => {
            database_type.contains("Country") || database_type.contains("City")
        }
    }
}
