//! End-to-end HTTP tests
//!
//! These tests drive the complete router in-process. Each test:
//! 1. Builds a router over a fresh TransactionStore
//! 2. Sends requests with `tower::ServiceExt::oneshot`
//! 3. Checks status codes and, for statistics, the exact JSON body
//!
//! Timestamps are generated relative to the current instant so that they land
//! inside (or outside) the live 60-second window.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use chrono::{SecondsFormat, TimeDelta, Utc};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use transaction_statistics::{router, TransactionStore};

    fn app() -> (Router, Arc<TransactionStore>) {
        let store = Arc::new(TransactionStore::new());
        (router(store.clone()), store)
    }

    /// RFC 3339 timestamp `offset_millis` from now, written with a -03:00 offset
    fn timestamp(offset_millis: i64) -> String {
        let offset = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        (Utc::now() + TimeDelta::milliseconds(offset_millis))
            .with_timezone(&offset)
            .to_rfc3339_opts(SecondsFormat::Millis, false)
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/transacao")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn delete() -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri("/transacao")
            .body(Body::empty())
            .unwrap()
    }

    fn get_statistics() -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri("/estatistica")
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn statistics(app: &Router) -> Value {
        let (status, body) = send(app, get_statistics()).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_empty_statistics_report_sentinels() {
        let (app, _) = app();

        let (status, body) = send(&app, get_statistics()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"count":0,"sum":0.0,"avg":0.0,"min":"Infinity","max":"-Infinity"}"#
        );
    }

    #[tokio::test]
    async fn test_post_then_statistics() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            post_json(json!({ "valor": 100.0, "dataHora": timestamp(-2_000) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body.is_empty());

        let (status, _) = send(
            &app,
            post_json(json!({ "valor": 50, "dataHora": timestamp(-1_000) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        assert_eq!(
            statistics(&app).await,
            json!({ "count": 2, "sum": 150.0, "avg": 75.0, "min": 50.0, "max": 100.0 })
        );
    }

    #[tokio::test]
    async fn test_minute_precision_timestamp_is_accepted() {
        let (app, store) = app();
        let offset = chrono::FixedOffset::west_opt(3 * 3600).unwrap();
        let data_hora = Utc::now()
            .with_timezone(&offset)
            .format("%Y-%m-%dT%H:%M%:z")
            .to_string();

        let (status, _) = send(
            &app,
            post_json(json!({ "valor": 7.0, "dataHora": data_hora }).to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_transactions_outside_window_are_ignored() {
        let (app, store) = app();

        let (status, _) = send(
            &app,
            post_json(json!({ "valor": 999.0, "dataHora": timestamp(-61_000) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &app,
            post_json(json!({ "valor": 1.5, "dataHora": timestamp(-5_000) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        assert_eq!(
            statistics(&app).await,
            json!({ "count": 1, "sum": 1.5, "avg": 1.5, "min": 1.5, "max": 1.5 })
        );
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_clears_statistics() {
        let (app, store) = app();

        send(
            &app,
            post_json(json!({ "valor": 10.0, "dataHora": timestamp(0) }).to_string()),
        )
        .await;

        let (status, body) = send(&app, delete()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert!(store.is_empty());

        let stats = statistics(&app).await;
        assert_eq!(stats["count"], json!(0));
        assert_eq!(stats["min"], json!("Infinity"));
        assert_eq!(stats["max"], json!("-Infinity"));
    }

    #[tokio::test]
    async fn test_delete_on_empty_store_is_ok() {
        let (app, _) = app();

        let (status, _) = send(&app, delete()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[case::zero_amount(json!({ "valor": 0, "dataHora": timestamp(-1_000) }).to_string())]
    #[case::negative_amount(json!({ "valor": -12.5, "dataHora": timestamp(-1_000) }).to_string())]
    #[case::future_timestamp(json!({ "valor": 12.5, "dataHora": timestamp(60_000) }).to_string())]
    #[case::missing_amount(json!({ "dataHora": timestamp(-1_000) }).to_string())]
    #[case::missing_timestamp(json!({ "valor": 12.5 }).to_string())]
    #[case::null_amount(json!({ "valor": null, "dataHora": timestamp(-1_000) }).to_string())]
    #[case::empty_object("{}".to_string())]
    #[case::amount_as_text(json!({ "valor": "abc", "dataHora": timestamp(-1_000) }).to_string())]
    #[case::unparseable_timestamp(json!({ "valor": 1.0, "dataHora": "yesterday" }).to_string())]
    #[case::timestamp_without_offset(json!({ "valor": 1.0, "dataHora": "2020-01-01T10:00:00" }).to_string())]
    #[tokio::test]
    async fn test_invalid_transactions_are_unprocessable(#[case] body: String) {
        let (app, store) = app();

        let (status, response_body) = send(&app, post_json(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response_body.is_empty());
        assert!(store.is_empty());
    }

    #[rstest]
    #[case::truncated_json(r#"{"valor": 1.0, "#)]
    #[case::not_json("valor=1.0")]
    #[case::empty_body("")]
    #[tokio::test]
    async fn test_malformed_bodies_are_bad_requests(#[case] body: &str) {
        let (app, store) = app();

        let (status, response_body) = send(&app, post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response_body.is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let (app, store) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/transacao")
            .body(Body::from(
                json!({ "valor": 1.0, "dataHora": timestamp(0) }).to_string(),
            ))
            .unwrap();

        let (status, _) = send(&app, request).await;

        assert!(status.is_client_error());
        assert!(store.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_posts_are_all_counted() {
        let (app, _) = app();

        let requests = (1..=200).map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = json!({ "valor": i as f64, "dataHora": timestamp(-1_000) }).to_string();
                app.oneshot(post_json(body)).await.unwrap().status()
            })
        });

        for status in futures::future::join_all(requests).await {
            assert_eq!(status.unwrap(), StatusCode::CREATED);
        }

        let stats = statistics(&app).await;
        assert_eq!(stats["count"], json!(200));
        assert_eq!(stats["sum"], json!(20_100.0));
        assert_eq!(stats["min"], json!(1.0));
        assert_eq!(stats["max"], json!(200.0));
    }
}
