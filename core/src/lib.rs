//! Synchronous API client core for the article service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). Actual HTTP round-trips go
//! through the [`Transport`] trait, injected into [`ArticleService`], so the
//! core stays deterministic and testable in isolation.
//!
//! # Design
//! - `ArticleClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `ArticleService` composes build → execute → parse over an injected
//!   transport; it adds nothing else (no retries, no timeouts, no caching).
//! - `BooleanFlag` is an unrelated leaf utility: one observable boolean with
//!   registered change-listeners.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod flag;
pub mod http;
pub mod service;
pub mod types;

pub use client::ArticleClient;
pub use error::ApiError;
pub use flag::BooleanFlag;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use service::ArticleService;
pub use types::{
    Article, ArticleList, ArticleSearchParams, ArticleUpdateParams, BatchDeleteArticles,
    DeleteArticle,
};
