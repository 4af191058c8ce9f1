//! Error types for the vocabulary API client.
//!
//! # Design
//! The envelope operations never return these: every outcome of a call is
//! folded into an `Envelope`. They surface where a typed answer is asked
//! for (`Envelope::decode`), when loading configuration, and from
//! `Transport` implementations before the client converts them.

use std::fmt;

/// Errors produced outside the envelope contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The envelope carried an error: either a non-2xx status or a
    /// transport failure (status 0).
    Http { status: u16, message: String },

    /// The envelope data was missing or did not match the requested type.
    Deserialization(String),

    /// A request payload could not be serialized to JSON.
    Serialization(String),

    /// Client configuration could not be loaded.
    InvalidConfig(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// No HTTP response was obtained: connection refused, DNS failure, timeout,
/// a body that could not be read, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}
