//! API Module
//!
//! HTTP handler and routing for the lookup endpoint.
//!
//! # Endpoints
//! - `ANY /?ip=<address>` - Look up an address given as query parameter
//! - `ANY /<address>` - Look up an address given as path

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
