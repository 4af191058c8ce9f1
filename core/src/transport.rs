//! Executing `HttpRequest`s.
//!
//! `Transport` is the seam between the envelope logic and real I/O. Tests
//! and embedding hosts supply their own; `UreqTransport` is the blocking
//! default.

use std::fmt;

use ureq::http::Response;
use ureq::{Agent, Body, RequestBuilder};

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
///
/// Any received response, whatever its status, is `Ok`. `Err` is reserved
/// for calls where no response was obtained.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// The agent has ureq's status-code-as-error behavior disabled so 4xx/5xx
/// responses come back as data for the envelope to classify.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = &request.headers;
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Post, body) => send(with_headers(self.agent.post(url), headers), body),
            (HttpMethod::Put, body) => send(with_headers(self.agent.put(url), headers), body),
            (HttpMethod::Patch, body) => send(with_headers(self.agent.patch(url), headers), body),
        };
        let response = result.map_err(|e| TransportError(e.to_string()))?;
        Ok(into_http_response(response))
    }
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: RequestBuilder<ureq::typestate::WithBody>,
    body: Option<&str>,
) -> Result<Response<Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body),
        None => builder.send_empty(),
    }
}

/// An unreadable body is treated like an empty one: the status was received,
/// so the call still produced a response. Headers are not copied; nothing in
/// the envelope depends on them.
fn into_http_response(mut response: Response<Body>) -> HttpResponse {
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    HttpResponse::new(status, body)
}
