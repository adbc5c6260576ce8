use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use seolens::audit::{AuditClient, AuditError, AuditRequest};
use serde_json::{json, Value};

/// Bind the router to an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server died");
    });

    format!("http://{}", addr)
}

fn request() -> AuditRequest {
    AuditRequest {
        url: "https://example.com".to_string(),
        target_keyword: "example".to_string(),
    }
}

#[tokio::test]
async fn test_successful_audit_parses_score_tags_and_competitors() {
    let router = Router::new().route(
        "/audit",
        post(|| async {
            Json(json!({
                "seo_score": 87,
                "meta_tags": { "title": "Example" },
                "competitor_comparison": [ { "url": "a.com" }, { "url": "b.com" } ]
            }))
        }),
    );
    let base = serve(router).await;

    let result = AuditClient::new(base)
        .run_audit(&request())
        .await
        .expect("Audit should succeed");

    assert_eq!(result.seo_score.to_string(), "87");
    assert_eq!(
        result.meta_tags.get("title").and_then(Value::as_str),
        Some("Example")
    );
    let urls: Vec<_> = result
        .competitor_comparison
        .iter()
        .map(|c| c.url.as_str())
        .collect();
    assert_eq!(urls, vec!["a.com", "b.com"]);
}

#[tokio::test]
async fn test_server_error_maps_to_status_message() {
    let router = Router::new().route("/audit", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = serve(router).await;

    let err = AuditClient::new(base)
        .run_audit(&request())
        .await
        .expect_err("500 must be an error");

    assert!(matches!(err, AuditError::Status(500)));
    assert_eq!(err.to_string(), "HTTP error! Status: 500");
}

#[tokio::test]
async fn test_zero_score_body_is_reported_as_malformed() {
    let router = Router::new().route(
        "/audit",
        post(|| async {
            Json(json!({
                "seo_score": 0,
                "meta_tags": {},
                "competitor_comparison": []
            }))
        }),
    );
    let base = serve(router).await;

    let err = AuditClient::new(base)
        .run_audit(&request())
        .await
        .expect_err("A zero score is rejected as malformed");

    assert!(matches!(err, AuditError::UnexpectedFormat));
    assert_eq!(
        err.to_string(),
        "Unexpected response format from the server."
    );
}

#[tokio::test]
async fn test_request_carries_json_payload() {
    // The Json extractor also rejects requests without a JSON content type
    let router = Router::new().route(
        "/audit",
        post(|Json(body): Json<Value>| async move {
            if body.get("url").and_then(Value::as_str) == Some("https://example.com")
                && body.get("target_keyword").and_then(Value::as_str) == Some("example")
            {
                Json(json!({
                    "seo_score": 1,
                    "meta_tags": {},
                    "competitor_comparison": []
                }))
                .into_response()
            } else {
                StatusCode::BAD_REQUEST.into_response()
            }
        }),
    );
    let base = serve(router).await;

    let result = AuditClient::new(base).run_audit(&request()).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_inputs_are_submitted_as_is() {
    let router = Router::new().route(
        "/audit",
        post(|Json(body): Json<Value>| async move {
            if body.get("url").and_then(Value::as_str) == Some("")
                && body.get("target_keyword").and_then(Value::as_str) == Some("")
            {
                Json(json!({
                    "seo_score": 1,
                    "meta_tags": {},
                    "competitor_comparison": []
                }))
                .into_response()
            } else {
                StatusCode::BAD_REQUEST.into_response()
            }
        }),
    );
    let base = serve(router).await;

    let empty = AuditRequest {
        url: String::new(),
        target_keyword: String::new(),
    };
    let result = AuditClient::new(base).run_audit(&empty).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_request_error() {
    // Nothing is listening here
    let client = AuditClient::new("http://127.0.0.1:1".to_string());

    let err = client
        .run_audit(&request())
        .await
        .expect_err("Connection must fail");

    assert!(matches!(err, AuditError::Request(_)));
}
