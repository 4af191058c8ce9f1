//! Client core for the vocabulary app's presentation layer.
//!
//! # Overview
//! Two independent leaves:
//! - the request envelope: `ApiClient` performs a call through a
//!   `Transport` and always returns an `Envelope { data, error, status }`,
//!   never an error or a panic;
//! - the style classifier: total functions mapping word metadata
//!   (frequency group, type, CEFR level) to presentation tokens.
//!
//! # Design
//! - `HttpRequest` / `HttpResponse` are plain data; `Envelope::from_response`
//!   is pure, so hosts doing their own I/O reuse the exact classification.
//! - Whether failures are logged is decided once, from `ClientConfig`, when
//!   the client is built.
//! - `WordCard` combines the classifier with a `Word` for renderers.

pub mod card;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod style;
pub mod transport;
pub mod types;
mod words;

pub use card::WordCard;
pub use client::ApiClient;
pub use config::{ClientConfig, Environment};
pub use envelope::{Envelope, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use style::{level_border_class, level_dot_style, rank_style, DotColor, RankStyle};
pub use transport::{Transport, UreqTransport};
pub use types::{CefrLevel, Word, WordCreate, WordUpdate};
