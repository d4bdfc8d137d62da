//! Geo Module
//!
//! Record types, the resolver port, and its MaxMind and in-memory adapters.

mod maxmind;
mod memory;
mod record;
mod resolver;

pub use maxmind::MaxMindResolver;
pub use memory::{MemoryResolver, NOT_FOUND_MESSAGE};
pub use record::{
    City, CityRecord, Continent, Country, CountryRecord, GeoRecord, Location, Names, Postal,
    RepresentedCountry, Subdivision, Traits,
};
pub use resolver::{GeoResolver, ResolveError};
