//! Stateless service grouping the five article operations over an injected
//! transport.
//!
//! # Design
//! Each method is exactly build → `transport.execute` → parse. The service
//! adds no retries, no timeouts, no local validation — a transport failure
//! surfaces as `ApiError::Transport` with the underlying error untouched,
//! and every response interpretation lives in the client's `parse_*`
//! methods. Methods take `&self`; invocations are independent and carry no
//! ordering guarantee.

use crate::client::ArticleClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{
    Article, ArticleList, ArticleSearchParams, ArticleUpdateParams, BatchDeleteArticles,
    DeleteArticle,
};

/// The article API surface, bound to a concrete transport.
#[derive(Debug)]
pub struct ArticleService<T: Transport> {
    client: ArticleClient,
    transport: T,
}

impl<T: Transport> ArticleService<T> {
    pub fn new(client: ArticleClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn list_articles(
        &self,
        params: Option<&ArticleSearchParams>,
    ) -> Result<ArticleList, ApiError> {
        let request = self.client.build_list_articles(params);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_list_articles(response)
    }

    pub fn get_article(&self, id: u64) -> Result<Article, ApiError> {
        let request = self.client.build_get_article(id);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_get_article(response)
    }

    pub fn update_article(&self, input: &ArticleUpdateParams) -> Result<(), ApiError> {
        let request = self.client.build_update_article(input)?;
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_update_article(response)
    }

    pub fn delete_article(&self, input: &DeleteArticle) -> Result<(), ApiError> {
        let request = self.client.build_delete_article(input);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_delete_article(response)
    }

    pub fn batch_delete_articles(&self, input: &BatchDeleteArticles) -> Result<(), ApiError> {
        let request = self.client.build_batch_delete_articles(input);
        let response = self.transport.execute(request).map_err(ApiError::Transport)?;
        self.client.parse_batch_delete_articles(response)
    }
}
