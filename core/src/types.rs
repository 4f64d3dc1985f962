//! Domain DTOs for the article API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. Optional
//! update fields use `skip_serializing_if` so omitted fields stay unchanged
//! on the server.

use serde::{Deserialize, Serialize};

/// A single article returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// One page of articles plus the pagination bookkeeping the server echoes
/// back. `total` counts all matching rows, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleList {
    pub records: Vec<Article>,
    pub current: u64,
    pub size: u64,
    pub total: u64,
}

/// Filter and pagination fields for the list operation. Every field is
/// optional; at request-build time absent fields take the defaults
/// `current = 1`, `size = 10`, and present fields win even when equal to a
/// default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSearchParams {
    pub current: Option<u64>,
    pub size: Option<u64>,
    pub keyword: Option<String>,
}

/// Request payload for updating an existing article. `id` routes the
/// request; only the optional fields present in the JSON are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleUpdateParams {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Target of a single-article delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteArticle {
    pub id: u64,
}

/// Targets of a batch delete. The ids travel as one comma-joined query
/// value, preserving order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteArticles {
    pub ids: Vec<u64>,
}
