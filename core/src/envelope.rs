//! The uniform `{data, error, status}` result of every API call.
//!
//! # Design
//! `Envelope::from_response` is a pure function of an `HttpResponse`, so the
//! whole success/failure classification is testable without a network. The
//! body is parsed leniently: an empty or malformed body yields `data: None`
//! and never changes the outcome, which is driven by the status code alone.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ureq::http::StatusCode;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// User-facing message for calls that never received a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Last-resort message when neither the payload nor the status code says
/// anything useful.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Payload fields consulted, in priority order, for a failure message.
const MESSAGE_FIELDS: [&str; 3] = ["error", "detail", "message"];

/// Result of a single call.
///
/// `error` is `None` exactly when `status` is in `200..=299`. A `status` of
/// `0` means no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Option<Value>,
    pub error: Option<String>,
    pub status: u16,
}

impl Envelope {
    /// Classify a received response.
    pub fn from_response(response: &HttpResponse) -> Self {
        let data = parse_payload(&response.body);
        if is_success_status(response.status) {
            return Self {
                data,
                error: None,
                status: response.status,
            };
        }
        let error = error_message(data.as_ref(), response.status);
        Self {
            data,
            error: Some(error),
            status: response.status,
        }
    }

    /// The envelope for a call that produced no response at all.
    pub fn network_error() -> Self {
        Self::failed_before_response(NETWORK_ERROR_MESSAGE)
    }

    /// A status-0 envelope with a custom message, for failures that happen
    /// before anything is sent (e.g. payload serialization).
    pub(crate) fn failed_before_response(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
            status: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// `true` when no HTTP response was received.
    pub fn is_network_error(&self) -> bool {
        self.status == 0
    }

    /// Typed view of `data` for a successful call.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if let Some(message) = &self.error {
            return Err(ApiError::Http {
                status: self.status,
                message: message.clone(),
            });
        }
        let data = self
            .data
            .clone()
            .ok_or_else(|| ApiError::Deserialization("response carried no data".to_string()))?;
        serde_json::from_value(data).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn is_success_status(status: u16) -> bool {
    (200..=299).contains(&status)
}

fn parse_payload(body: &str) -> Option<Value> {
    // `null` parses fine but is indistinguishable from "no payload".
    serde_json::from_str::<Value>(body)
        .ok()
        .filter(|value| !value.is_null())
}

/// Pick the failure message: payload `error`, `detail`, `message`, then the
/// canonical reason phrase, then `FALLBACK_ERROR_MESSAGE`.
fn error_message(payload: Option<&Value>, status: u16) -> String {
    payload
        .and_then(Value::as_object)
        .and_then(|fields| {
            MESSAGE_FIELDS
                .iter()
                .filter_map(|name| fields.get(*name))
                .find_map(truthy_text)
        })
        .or_else(|| reason_phrase(status).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

/// Strings are used verbatim; other non-empty values are rendered as JSON.
/// `null`, `false`, `0` and `""` do not count as a message.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn reason_phrase(status: u16) -> Option<&'static str> {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
}
