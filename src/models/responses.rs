//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use bytes::Bytes;
use serde::Serialize;

use crate::geo::GeoRecord;

/// Error message returned for keys that are not IP addresses.
pub const INVALID_IP_MESSAGE: &str = "unable to decode ip";

/// Body of every lookup response.
///
/// Exactly one of `Data` and `Error` is set; the other is omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePayload {
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<GeoRecord>,
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponsePayload {
    /// Creates a payload carrying a record
    pub fn data(record: GeoRecord) -> Self {
        Self {
            data: Some(record),
            error: None,
        }
    }

    /// Creates a payload carrying an error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Payload for a key that is not a valid address
    pub fn invalid_ip() -> Self {
        Self::error(INVALID_IP_MESSAGE)
    }

    // == Encode ==
    /// Serializes the payload, compact or with 2-space indentation.
    pub fn encode(&self, pretty: bool) -> serde_json::Result<Bytes> {
        let buf = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        Ok(Bytes::from(buf))
    }
}
