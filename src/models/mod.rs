//! Request and Response models for the lookup API
//!
//! This module defines the DTOs used for extracting lookup keys and
//! serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::LookupQuery;
pub use responses::{ResponsePayload, INVALID_IP_MESSAGE};
