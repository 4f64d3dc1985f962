use std::{collections::BTreeMap, num::ParseIntError, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// One page of articles. `total` counts all rows matching the filter, not
/// just this page.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlePage {
    pub records: Vec<Article>,
    pub current: u64,
    pub size: u64,
    pub total: u64,
}

#[derive(Deserialize)]
pub struct CreateArticle {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_current")]
    pub current: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    pub keyword: Option<String>,
}

fn default_current() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct BatchDeleteQuery {
    pub ids: String,
}

/// Articles keyed by id (BTreeMap keeps list order deterministic) plus the
/// sequential id counter.
#[derive(Default)]
pub struct Store {
    articles: BTreeMap<u64, Article>,
    last_id: u64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/articles",
            get(list_articles).post(create_article).delete(batch_delete_articles),
        )
        .route(
            "/articles/{id}",
            get(get_article).patch(update_article).delete(delete_article),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_articles(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<ArticlePage> {
    let store = db.read().await;
    let filtered: Vec<Article> = store
        .articles
        .values()
        .filter(|article| match &query.keyword {
            Some(keyword) => article.title.contains(keyword),
            None => true,
        })
        .cloned()
        .collect();

    let total = filtered.len() as u64;
    let offset = query.current.saturating_sub(1).saturating_mul(query.size);
    let records = filtered
        .into_iter()
        .skip(offset as usize)
        .take(query.size as usize)
        .collect();

    Json(ArticlePage {
        records,
        current: query.current,
        size: query.size,
        total,
    })
}

async fn create_article(
    State(db): State<Db>,
    Json(input): Json<CreateArticle>,
) -> (StatusCode, Json<Article>) {
    let mut store = db.write().await;
    store.last_id += 1;
    let article = Article {
        id: store.last_id,
        title: input.title,
        content: input.content,
    };
    store.articles.insert(article.id, article.clone());
    (StatusCode::CREATED, Json(article))
}

async fn get_article(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Article>, StatusCode> {
    let store = db.read().await;
    store.articles.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_article(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateArticle>,
) -> Result<Json<Article>, StatusCode> {
    let mut store = db.write().await;
    let article = store.articles.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        article.title = title;
    }
    if let Some(content) = input.content {
        article.content = content;
    }
    Ok(Json(article.clone()))
}

async fn delete_article(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.articles.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn batch_delete_articles(
    State(db): State<Db>,
    Query(query): Query<BatchDeleteQuery>,
) -> Result<StatusCode, StatusCode> {
    let ids = parse_ids(&query.ids).map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut store = db.write().await;
    for id in ids {
        store.articles.remove(&id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Parse the comma-joined `ids` query value. An empty string means "delete
/// nothing" and is not an error.
fn parse_ids(raw: &str) -> Result<Vec<u64>, ParseIntError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|part| part.parse()).collect()
}
