//! Router-level tests for the guard chain
//!
//! These drive the real router with `tower::ServiceExt::oneshot` and only
//! exercise paths that reject before reaching the document store, so they
//! run without a database.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bson::Document;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use foodhub_server::{
    config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig},
    create_router,
    models::user::Claims,
    repository::Repository,
    services::Services,
    AppState,
};

const SECRET: &str = "guard-test-secret";

async fn test_app() -> Router {
    let config = AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig::default(),
        auth: AuthConfig {
            jwt_secret: SECRET.to_string(),
            token_expiration_hours: 1,
        },
        logging: LoggingConfig::default(),
    };

    // The driver connects lazily; no database is reached in these tests
    let client = mongodb::Client::with_uri_str(&config.database.uri)
        .await
        .expect("client options should parse");
    let repository = Repository::new(&client.database("foodhub_guard_tests"));
    let services = Services::new(repository, config.auth.clone());

    create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

fn bearer_token(email: &str, exp_offset: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        email: email.to_string(),
        iat: now,
        exp: now + exp_offset,
        extra: Document::new(),
    };
    claims.create_token(SECRET).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn liveness_is_unguarded() {
    let response = test_app()
        .await
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"server running");
}

#[tokio::test]
async fn guarded_route_without_header_is_401() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/comments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "unAuthorized user");
}

#[tokio::test]
async fn garbage_token_is_401() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/comments")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "unAuthorized user");
}

#[tokio::test]
async fn header_without_token_part_is_401() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/comments")
                .header(header::AUTHORIZATION, "Bearer")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_401() {
    let token = bearer_token("a@x.com", -7200);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/comments")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn jwt_endpoint_issues_verifiable_token() {
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "email": "a@x.com", "name": "A User" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().expect("token in response");

    let claims = Claims::from_token(token, SECRET).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.extra.get_str("name").unwrap(), "A User");
    // 1 hour expiry
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn jwt_endpoint_signs_arbitrary_identity() {
    // The identity payload is not shape-checked; "admin" is a valid
    // identity even though it is not an address
    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/jwt")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "email": "admin" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let claims = Claims::from_token(body["token"].as_str().unwrap(), SECRET).unwrap();
    assert_eq!(claims.email, "admin");
}

#[tokio::test]
async fn admin_status_for_foreign_email_is_false_without_role_read() {
    // The self-or-admin check short-circuits before touching storage, so
    // this runs without a database
    let token = bearer_token("a@x.com", 3600);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/users/admin/other@x.com")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "admin": false }));
}

#[tokio::test]
async fn owner_scoped_read_with_foreign_email_is_403() {
    let token = bearer_token("a@x.com", 3600);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/bookings?email=b@y.com")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Forbidden Access");
}

#[tokio::test]
async fn owner_scoped_read_without_email_is_empty_list() {
    let token = bearer_token("a@x.com", 3600);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn user_foods_read_with_foreign_email_is_403() {
    let token = bearer_token("a@x.com", 3600);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .uri("/userFoods?email=b@y.com")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_id_is_400() {
    let token = bearer_token("a@x.com", 3600);

    let response = test_app()
        .await
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/userFoods/not-a-valid-id")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], true);
}
