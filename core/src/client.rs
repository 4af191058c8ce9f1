//! The request envelope client.
//!
//! # Design
//! `ApiClient` holds its configuration and a `Transport` and carries no
//! mutable state between calls. Every operation returns an `Envelope`;
//! nothing is retried, cached, de-duplicated or timed out here. Callers
//! that want a deadline configure it on the transport.

use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, RequestOptions};
use crate::transport::{Transport, UreqTransport};

#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<UreqTransport> {
    /// Client for `base_url` over the default blocking transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(ClientConfig::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one call and fold the outcome into an `Envelope`.
    pub fn request(&self, url: &str, options: RequestOptions) -> Envelope {
        let request = HttpRequest::new(self.config.resolve(url), options);
        match self.transport.execute(&request) {
            Ok(response) => {
                let envelope = Envelope::from_response(&response);
                if let Some(message) = &envelope.error {
                    if !self.config.environment.is_production() {
                        tracing::error!(
                            method = %request.method,
                            url = %request.url,
                            status = envelope.status,
                            error = %message,
                            "API error"
                        );
                    }
                }
                envelope
            }
            Err(e) => {
                if !self.config.environment.is_production() {
                    tracing::error!(
                        method = %request.method,
                        url = %request.url,
                        error = %e,
                        "API network error"
                    );
                }
                Envelope::network_error()
            }
        }
    }

    pub fn get(&self, url: &str) -> Envelope {
        self.request(url, RequestOptions::method(HttpMethod::Get))
    }

    pub fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Envelope {
        match serde_json::to_string(payload) {
            Ok(body) => self.request(url, RequestOptions::json(HttpMethod::Post, Some(body))),
            Err(e) => self.serialization_failure(url, e),
        }
    }

    pub fn put<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Envelope {
        match serde_json::to_string(payload) {
            Ok(body) => self.request(url, RequestOptions::json(HttpMethod::Put, Some(body))),
            Err(e) => self.serialization_failure(url, e),
        }
    }

    /// PATCH with a body only when `payload` is present and truthy; `None`,
    /// `null`, `false`, `0` and `""` send no body.
    pub fn patch<P: Serialize + ?Sized>(&self, url: &str, payload: Option<&P>) -> Envelope {
        let body = match payload.map(serde_json::to_value).transpose() {
            Ok(value) => value.filter(is_truthy).map(|value| value.to_string()),
            Err(e) => return self.serialization_failure(url, e),
        };
        self.request(url, RequestOptions::json(HttpMethod::Patch, body))
    }

    pub fn delete(&self, url: &str) -> Envelope {
        self.request(url, RequestOptions::method(HttpMethod::Delete))
    }

    fn serialization_failure(&self, url: &str, e: serde_json::Error) -> Envelope {
        let err = ApiError::Serialization(e.to_string());
        if !self.config.environment.is_production() {
            tracing::error!(url = %url, error = %err, "API request not sent");
        }
        Envelope::failed_before_response(err.to_string())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}
