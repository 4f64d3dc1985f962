//! Stateless HTTP request builder and response parser for the article API.
//!
//! # Design
//! `ArticleClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The I/O in between belongs to a `Transport`, keeping the
//! core deterministic and free of network dependencies.
//!
//! List queries merge defaults first, caller params on top, so a caller
//! value equal to a default still structurally wins and no supplied field is
//! ever dropped. Batch deletes serialize ids as one comma-joined query value
//! (never repeated keys) — the counterpart server expects exactly that
//! encoding, including `ids=` with an empty value for an empty sequence.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    Article, ArticleList, ArticleSearchParams, ArticleUpdateParams, BatchDeleteArticles,
    DeleteArticle,
};

const DEFAULT_CURRENT: u64 = 1;
const DEFAULT_SIZE: u64 = 10;

/// Synchronous, stateless client for the article API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Pair it with a `Transport` (see `ArticleService`)
/// to execute the round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    base_url: String,
}

impl ArticleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_articles(&self, params: Option<&ArticleSearchParams>) -> HttpRequest {
        let current = params.and_then(|p| p.current).unwrap_or(DEFAULT_CURRENT);
        let size = params.and_then(|p| p.size).unwrap_or(DEFAULT_SIZE);

        let mut query = vec![
            ("current".to_string(), current.to_string()),
            ("size".to_string(), size.to_string()),
        ];
        if let Some(keyword) = params.and_then(|p| p.keyword.as_deref()) {
            query.push(("keyword".to_string(), keyword.to_string()));
        }

        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/articles", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_article(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/articles/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update_article(&self, input: &ArticleUpdateParams) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/articles/{}", self.base_url, input.id),
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_article(&self, input: &DeleteArticle) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/articles/{}", self.base_url, input.id),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_batch_delete_articles(&self, input: &BatchDeleteArticles) -> HttpRequest {
        let ids = input
            .ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/articles", self.base_url),
            query: vec![("ids".to_string(), ids)],
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_articles(&self, response: HttpResponse) -> Result<ArticleList, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_article(&self, response: HttpResponse) -> Result<Article, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The update response payload is opaque per the API contract; only the
    /// status is interpreted.
    pub fn parse_update_article(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    pub fn parse_delete_article(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_batch_delete_articles(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
