//! Lookup Module
//!
//! Turns a raw lookup key into a serialized response, going through the
//! response cache when it is enabled.

mod service;


pub use service::{LookupOutcome, LookupService};
