//! API Handlers
//!
//! HTTP request handler for the lookup endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
};

use crate::cache::{shared, CacheStore};
use crate::config::Config;
use crate::error::Result;
use crate::geo::GeoResolver;
use crate::lookup::{LookupOutcome, LookupService};
use crate::models::LookupQuery;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lookup orchestration, holding the resolver and the optional cache
    pub service: LookupService,
}

impl AppState {
    /// Creates a new AppState around a lookup service.
    pub fn new(service: LookupService) -> Self {
        Self { service }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The response cache is only built when the configured TTL is non-zero.
    pub fn from_config(config: &Config, resolver: Arc<dyn GeoResolver>) -> Self {
        let cache = config.cache_ttl().map(|ttl| shared(CacheStore::new(ttl)));
        Self::new(LookupService::new(
            resolver,
            cache,
            config.lookup,
            config.pretty,
        ))
    }
}

impl IntoResponse for LookupOutcome {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Handler for every request path.
///
/// Takes the key from the first `ip` query parameter, falling back to the
/// decoded path, and writes the lookup body back verbatim.
pub async fn lookup_handler(State(state): State<AppState>, uri: Uri) -> Result<LookupOutcome> {
    let key = LookupQuery::parse(uri.query()).lookup_key(uri.path());

    state.service.handle(&key).await
}
