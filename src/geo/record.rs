//! Geo Records
//!
//! Owned record shapes read from a GeoIP2 / GeoLite2 database.
//!
//! Fields deserialize from the database layout (`iso_code`, `geoname_id`)
//! and serialize under the PascalCase names existing clients of the service
//! read (`IsoCode`, `GeoNameID`). Nested objects and scalars are always
//! written, with zero values when the database has no data; name maps and
//! subdivisions are written as `null` when absent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Localized names keyed by language code (`en`, `de`, ...).
pub type Names = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Continent {
    pub code: String,
    #[serde(rename(serialize = "GeoNameID"))]
    pub geoname_id: u32,
    pub names: Option<Names>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Country {
    #[serde(rename(serialize = "GeoNameID"))]
    pub geoname_id: u32,
    pub is_in_european_union: bool,
    pub iso_code: String,
    pub names: Option<Names>,
}

/// Country represented by users of the address, e.g. a military base abroad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct RepresentedCountry {
    #[serde(rename(serialize = "GeoNameID"))]
    pub geoname_id: u32,
    pub is_in_european_union: bool,
    pub iso_code: String,
    pub names: Option<Names>,
    #[serde(rename(serialize = "Type", deserialize = "type"))]
    pub representation_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct City {
    #[serde(rename(serialize = "GeoNameID"))]
    pub geoname_id: u32,
    pub names: Option<Names>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Location {
    pub accuracy_radius: u16,
    pub latitude: f64,
    pub longitude: f64,
    pub metro_code: u16,
    pub time_zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Postal {
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Subdivision {
    #[serde(rename(serialize = "GeoNameID"))]
    pub geoname_id: u32,
    pub iso_code: String,
    pub names: Option<Names>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct Traits {
    pub is_anonymous_proxy: bool,
    pub is_satellite_provider: bool,
}

// == Country Record ==
/// Result of a country-level lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct CountryRecord {
    pub continent: Continent,
    pub country: Country,
    pub registered_country: Country,
    pub represented_country: RepresentedCountry,
    pub traits: Traits,
}

// == City Record ==
/// Result of a city-level lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "PascalCase"))]
pub struct CityRecord {
    pub city: City,
    pub continent: Continent,
    pub country: Country,
    pub location: Location,
    pub postal: Postal,
    pub registered_country: Country,
    pub represented_country: RepresentedCountry,
    pub subdivisions: Option<Vec<Subdivision>>,
    pub traits: Traits,
}

// == Geo Record ==
/// Record returned by a resolver; the variant follows the configured lookup mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoRecord {
    City(CityRecord),
    Country(CountryRecord),
}

impl From<CityRecord> for GeoRecord {
    fn from(record: CityRecord) -> Self {
        GeoRecord::City(record)
    }
}

impl From<CountryRecord> for GeoRecord {
    fn from(record: CountryRecord) -> Self {
        GeoRecord::Country(record)
    }
}
