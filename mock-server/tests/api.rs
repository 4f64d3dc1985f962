use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Article, ArticlePage};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn delete_request(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Seed `count` articles titled "Article {n}" through the running service.
async fn seed<S>(app: &mut S, count: usize)
where
    S: tower::Service<Request<String>, Response = axum::response::Response>,
    S::Error: std::fmt::Debug,
{
    for n in 1..=count {
        let resp = ServiceExt::ready(&mut *app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/articles",
                &format!(r#"{{"title":"Article {n}","content":"body {n}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }
}

// --- list ---

#[tokio::test]
async fn list_articles_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/articles")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ArticlePage = body_json(resp).await;
    assert!(page.records.is_empty());
    assert_eq!(page.current, 1);
    assert_eq!(page.size, 10);
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn list_articles_paginates() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 7).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles?current=2&size=3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: ArticlePage = body_json(resp).await;
    assert_eq!(page.total, 7);
    assert_eq!(page.current, 2);
    assert_eq!(page.size, 3);
    let titles: Vec<&str> = page.records.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Article 4", "Article 5", "Article 6"]);
}

#[tokio::test]
async fn list_articles_page_past_the_end_is_empty() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 2).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles?current=5&size=10"))
        .await
        .unwrap();
    let page: ArticlePage = body_json(resp).await;
    assert!(page.records.is_empty());
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn list_articles_filters_by_keyword() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 3).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles?keyword=Article%202"))
        .await
        .unwrap();
    let page: ArticlePage = body_json(resp).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].title, "Article 2");
}

// --- create ---

#[tokio::test]
async fn create_article_returns_201_with_sequential_ids() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/articles", r#"{"title":"First"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: Article = body_json(resp).await;
    assert_eq!(first.id, 1);
    assert_eq!(first.title, "First");
    assert!(first.content.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/articles", r#"{"title":"Second"}"#))
        .await
        .unwrap();
    let second: Article = body_json(resp).await;
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn create_article_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/articles", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_article_not_found() {
    let app = app();
    let resp = app.oneshot(get_request("/articles/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_article_bad_id_returns_400() {
    let app = app();
    let resp = app.oneshot(get_request("/articles/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_article_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request("PATCH", "/articles/99", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_article_applies_partial_fields() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 1).await;

    // Only title; content stays. The body also carries the routing id the
    // client includes — it must be ignored in favor of the path.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            "/articles/1",
            r#"{"id":1,"title":"Renamed"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Article = body_json(resp).await;
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "body 1");

    // Only content; title stays.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            "/articles/1",
            r#"{"content":"rewritten"}"#,
        ))
        .await
        .unwrap();
    let updated: Article = body_json(resp).await;
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, "rewritten");
}

// --- delete ---

#[tokio::test]
async fn delete_article_not_found() {
    let app = app();
    let resp = app.oneshot(delete_request("/articles/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_article_returns_204() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 1).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request("/articles/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- batch delete ---

#[tokio::test]
async fn batch_delete_removes_listed_ids() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 4).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request("/articles?ids=1,3"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles"))
        .await
        .unwrap();
    let page: ArticlePage = body_json(resp).await;
    let remaining: Vec<u64> = page.records.iter().map(|a| a.id).collect();
    assert_eq!(remaining, vec![2, 4]);
}

#[tokio::test]
async fn batch_delete_ignores_missing_ids() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 1).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request("/articles?ids=1,99"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles"))
        .await
        .unwrap();
    let page: ArticlePage = body_json(resp).await;
    assert!(page.records.is_empty());
}

#[tokio::test]
async fn batch_delete_empty_ids_is_a_no_op() {
    use tower::Service;

    let mut app = app().into_service();
    seed(&mut app, 2).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete_request("/articles?ids="))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/articles"))
        .await
        .unwrap();
    let page: ArticlePage = body_json(resp).await;
    assert_eq!(page.records.len(), 2);
}

#[tokio::test]
async fn batch_delete_malformed_ids_returns_400() {
    let app = app();
    let resp = app.oneshot(delete_request("/articles?ids=1,x,3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn batch_delete_missing_ids_param_returns_400() {
    let app = app();
    let resp = app.oneshot(delete_request("/articles")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
