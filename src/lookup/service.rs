//! Lookup Service
//!
//! Cache-aside request path: validate the raw key, answer from the response
//! cache when possible, otherwise resolve, serialize once and populate.

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::cache::SharedCache;
use crate::config::LookupMode;
use crate::error::Result;
use crate::geo::GeoResolver;
use crate::models::ResponsePayload;

// == Lookup Outcome ==
/// Serialized response for one lookup together with its status.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    /// Response body, written verbatim
    pub body: Bytes,
    /// 400 for malformed addresses, 200 otherwise
    pub status: StatusCode,
    /// True when the body was served from the cache
    pub cached: bool,
}

impl LookupOutcome {
    fn fresh(body: Bytes) -> Self {
        Self {
            body,
            status: StatusCode::OK,
            cached: false,
        }
    }

    fn hit(body: Bytes) -> Self {
        Self {
            body,
            status: StatusCode::OK,
            cached: true,
        }
    }
}

// == Lookup Service ==
/// Orchestrates cache lookups, resolver calls and payload serialization.
///
/// Mode and formatting are fixed at construction and shared by every request.
#[derive(Clone)]
pub struct LookupService {
    resolver: Arc<dyn GeoResolver>,
    cache: Option<SharedCache>,
    mode: LookupMode,
    pretty: bool,
}

impl LookupService {
    /// Creates a service. Pass `None` as cache to disable caching entirely.
    pub fn new(
        resolver: Arc<dyn GeoResolver>,
        cache: Option<SharedCache>,
        mode: LookupMode,
        pretty: bool,
    ) -> Self {
        Self {
            resolver,
            cache,
            mode,
            pretty,
        }
    }

    /// Shared cache handle, if caching is enabled.
    pub fn cache(&self) -> Option<&SharedCache> {
        self.cache.as_ref()
    }

    // == Handle ==
    /// Answers a lookup for `raw_key`.
    ///
    /// The key is used verbatim as the cache key. Invalid addresses are never
    /// cached; resolver errors are cached like any other answer. A cache hit
    /// returns the bytes stored at insertion time, so their formatting is the
    /// one chosen by the request that populated the entry.
    pub async fn handle(&self, raw_key: &str) -> Result<LookupOutcome> {
        let Ok(ip) = raw_key.parse::<IpAddr>() else {
            debug!("rejecting undecodable key {:?}", raw_key);
            let body = ResponsePayload::invalid_ip().encode(self.pretty)?;
            return Ok(LookupOutcome {
                body,
                status: StatusCode::BAD_REQUEST,
                cached: false,
            });
        };

        if let Some(cache) = &self.cache {
            if let Some(body) = cache.read().await.get(raw_key) {
                return Ok(LookupOutcome::hit(body));
            }
        }

        let payload = match self.resolver.resolve(ip, self.mode) {
            Ok(record) => ResponsePayload::data(record),
            Err(err) => {
                debug!("lookup of {} failed: {}", ip, err);
                ResponsePayload::error(err.to_string())
            }
        };
        let body = payload.encode(self.pretty)?;

        if let Some(cache) = &self.cache {
            cache.write().await.set(raw_key.to_string(), body.clone());
        }

        Ok(LookupOutcome::fresh(body))
    }
}
