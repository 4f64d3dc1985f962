//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — executing the round-trip is the job of a
//! [`Transport`] implementation supplied by the caller. This separation keeps
//! the core deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across the transport boundary without lifetime concerns.

/// HTTP method for a request. Only the methods the article surface uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `ArticleClient::build_*` methods. `query` is an ordered key/value
/// list; the transport serializes it into the URL's query string, encoding
/// values as needed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to `ArticleClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure reported by a [`Transport`] before a response was produced
/// (connection refused, DNS, timeout, ...). Opaque to the core; carried
/// unchanged inside `ApiError::Transport`.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// The injected collaborator that performs the actual network I/O.
///
/// Implementations own every concern beyond request description: connection
/// management, timeouts, retries, auth, cancellation. A non-2xx status is a
/// response, not a transport error — it must be returned as data so the
/// client's `parse_*` methods can interpret it.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
