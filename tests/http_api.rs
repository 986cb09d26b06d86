//! HTTP surface tests
//!
//! Drives the axum router directly (no socket) over the memory backend:
//! scan redirect carries the credential, order placement consumes it, and
//! failure responses keep their distinct error codes.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use kedai_server::db::models::DiningTableCreate;
use kedai_server::db::repository::TableStore;
use kedai_server::{Config, ServerState, StoreBackend};
use tower::ServiceExt;

async fn test_state() -> ServerState {
    let config = Config {
        work_dir: "./data".to_string(),
        http_port: 0,
        frontend_url: "http://localhost:5173".to_string(),
        session_ttl_secs: 7200,
        store_backend: StoreBackend::Memory,
        environment: "development".to_string(),
    };
    ServerState::initialize(&config).await.unwrap()
}

fn order_body(table: &str, code: &str) -> Body {
    Body::from(
        serde_json::json!({
            "table_number": table,
            "session_code": code,
            "items": [
                { "product_id": "latte", "name": "Latte", "price": 4.5, "quantity": 1 }
            ],
            "total_price": 4.5
        })
        .to_string(),
    )
}

fn post_order(table: &str, code: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .body(order_body(table, code))
        .unwrap()
}

#[tokio::test]
async fn scan_redirects_with_credential_and_order_consumes_it() {
    let state = test_state().await;
    state
        .tables
        .create(DiningTableCreate {
            table_number: "12".to_string(),
            name: Some("Window 2".to_string()),
        })
        .await
        .unwrap();
    let app = kedai_server::api::router(state);

    // Scan the QR code
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/scan/table/12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("http://localhost:5173/?table=12&code="));
    let code = location.split("code=").nth(1).unwrap().to_string();
    assert_eq!(code.len(), 32);

    // Place the order
    let response = app.clone().oneshot(post_order("12", &code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "E0000");
    assert_eq!(json["data"]["table_number"], "12");

    // Replay: consumed ticket is rejected with the ticket-specific code
    let response = app.oneshot(post_order("12", &code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "E7002");
}

#[tokio::test]
async fn scan_unknown_table_is_404() {
    let state = test_state().await;
    let app = kedai_server::api::router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/scan/table/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_with_empty_items_is_400() {
    let state = test_state().await;
    state
        .tables
        .create(DiningTableCreate {
            table_number: "3".to_string(),
            name: None,
        })
        .await
        .unwrap();
    let app = kedai_server::api::router(state);

    let body = Body::from(
        serde_json::json!({
            "table_number": "3",
            "session_code": "deadbeef",
            "items": [],
            "total_price": 0.0
        })
        .to_string(),
    );
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_table_registration_is_409() {
    let state = test_state().await;
    let app = kedai_server::api::router(state);

    let register = || {
        Request::builder()
            .method("POST")
            .uri("/api/tables")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "table_number": "5", "name": "Patio" }).to_string(),
            ))
            .unwrap()
    };

    let response = app.clone().oneshot(register()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(register()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
