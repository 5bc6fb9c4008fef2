// backend/gateway/rest-api/tests/rest_it.rs
//
// La gateway complète contre un vrai serveur RPC éphémère : un serveur
// Tonic sur un port libre, le routeur axum piloté en mémoire via tower.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Server};
use tower::ServiceExt;

use pos::domain::auth::MemoryAuth;
use pos::domain::memory::{CategoryModel, InMemoryLifecycle};
use pos::grpc::handlers::{AuthHandler, CategoryHandler};
use pos::grpc::proto::auth_service_server::AuthServiceServer;
use pos::grpc::proto::category_service_server::CategoryServiceServer;
use rest_api::context::ApiContext;

struct TestBackend {
    router: axum::Router,
    categories: Arc<InMemoryLifecycle<CategoryModel>>,
}

async fn setup() -> TestBackend {
    let categories = Arc::new(InMemoryLifecycle::<CategoryModel>::new());
    let auth = Arc::new(MemoryAuth::new([(
        "admin@pos.local".to_string(),
        "admin123".to_string(),
    )]));

    // 1. Serveur RPC sur un port éphémère.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let category_handler = CategoryHandler::new(categories.clone());
    let auth_handler = AuthHandler::new(auth);

    tokio::spawn(async move {
        Server::builder()
            .add_service(CategoryServiceServer::new(category_handler))
            .add_service(AuthServiceServer::new(auth_handler))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    // 2. Gateway branchée sur ce serveur.
    let channel = Channel::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap();

    TestBackend {
        router: rest_api::app(Arc::new(ApiContext::new(channel))),
        categories,
    }
}

async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_returns_201_with_the_success_envelope() {
    let backend = setup().await;

    let (status, body) = send(
        &backend.router,
        post_json("/api/category/create", json!({"name": "Drinks"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["name"], "Drinks");
    assert_eq!(body["data"]["deleted_at"], Value::Null);
}

#[tokio::test]
async fn unparsable_path_id_is_rejected_without_an_rpc_call() {
    let backend = setup().await;

    let (status, body) = send(&backend.router, get("/api/category/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 400);
    // Le tier RPC n'a jamais été sollicité.
    assert_eq!(backend.categories.calls(), 0);
}

#[tokio::test]
async fn unreadable_paging_params_fall_back_to_defaults() {
    let backend = setup().await;
    send(
        &backend.router,
        post_json("/api/category/create", json!({"name": "Drinks"})),
    )
    .await;

    let (status, body) = send(
        &backend.router,
        get("/api/category?page=abc&page_size=-1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["current_page"], 1);
    assert_eq!(body["pagination"]["page_size"], 10);
}

#[tokio::test]
async fn empty_listing_serializes_data_as_an_empty_array() {
    let backend = setup().await;

    let (status, body) = send(&backend.router, get("/api/category")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn malformed_json_body_is_a_400() {
    let backend = setup().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/category/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&backend.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request format");
    assert_eq!(backend.categories.calls(), 0);
}

#[tokio::test]
async fn semantic_validation_failure_names_the_cause() {
    let backend = setup().await;

    let (status, body) = send(
        &backend.router,
        post_json("/api/category/create", json!({"name": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("validation error"), "got: {message}");
}

#[tokio::test]
async fn missing_record_surfaces_as_404() {
    let backend = setup().await;

    let (status, body) = send(&backend.router, get("/api/category/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn lifecycle_round_trip_over_http() {
    let backend = setup().await;

    let (_, created) = send(
        &backend.router,
        post_json("/api/category/create", json!({"name": "Drinks"})),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, trashed) = send(
        &backend.router,
        post_json(&format!("/api/category/trashed/{id}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(trashed["data"]["deleted_at"].is_string());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/category/permanent/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, purged) = send(&backend.router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(purged["data"], json!(true));

    let (status, _) = send(&backend.router, get(&format!("/api/category/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_credentials_map_to_401() {
    let backend = setup().await;

    let (status, body) = send(
        &backend.router,
        post_json(
            "/api/auth/login",
            json!({"email": "admin@pos.local", "password": "wrong"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 401);
}

#[tokio::test]
async fn login_then_refresh_rotates_the_pair() {
    let backend = setup().await;

    let (status, body) = send(
        &backend.router,
        post_json(
            "/api/auth/login",
            json!({"email": "admin@pos.local", "password": "admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let refresh_token = body["data"]["refresh_token"].as_str().unwrap().to_string();

    let (status, refreshed) = send(
        &backend.router,
        post_json("/api/auth/refresh", json!({"refresh_token": refresh_token})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(refreshed["data"]["refresh_token"], body["data"]["refresh_token"]);
}
