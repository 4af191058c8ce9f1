//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` turns a URL plus
//! `RequestOptions` into an `HttpRequest`, hands it to a `Transport`, and
//! folds whatever comes back into an `Envelope`. Hosts that do their own I/O
//! (a browser shell, a C caller through the FFI crate) can skip the client
//! and call `Envelope::from_response` directly.
//!
//! All fields use owned types (`String`, `Vec`) so values can cross FFI
//! boundaries without lifetime concerns.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call configuration accepted by `ApiClient::request`.
///
/// The default is a bare GET with no headers and no body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options for a JSON-bodied call: sets `Content-Type: application/json`.
    pub fn json(method: HttpMethod, body: Option<String>) -> Self {
        Self {
            method,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method: options.method,
            url: url.into(),
            headers: options.headers,
            body: options.body,
        }
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` (or by the host) once a response has actually
/// been received. An empty `body` is valid. `headers` is for hosts that
/// build responses themselves; `UreqTransport` leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
