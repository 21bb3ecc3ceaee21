//! End-to-end smoke tests for the full ssmgrd stack.
//!
//! Each test wires the complete application (sample catalog, real services,
//! console route table, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use ssmgr_adapter_http_axum::router;
use ssmgr_adapter_http_axum::routes::RouteTable;
use ssmgr_adapter_http_axum::state::AppState;
use ssmgr_adapter_static::{Seed, StaticCatalog};
use ssmgr_app::services::account_service::AccountService;
use ssmgr_app::services::grid_service::ServerGridService;
use ssmgr_app::services::pricing_service::PricingService;
use ssmgr_domain::grid::ColumnsPerRow;
use tower::ServiceExt;

fn wire(catalog: StaticCatalog) -> axum::Router {
    let state = AppState::new(
        ServerGridService::new(catalog.clone(), ColumnsPerRow::new(3).unwrap()),
        AccountService::new(catalog.clone()),
        PricingService::new(catalog),
        RouteTable::console(),
    );
    router::build(state)
}

/// Build a fully-wired router backed by the built-in sample catalog.
fn app() -> axum::Router {
    wire(StaticCatalog::sample().expect("sample catalog should load"))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Console pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_home_page_with_catalog_counts() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Overview"));
    assert!(body.contains("<dt>Servers</dt><dd>3</dd>"));
    assert!(body.contains("<dt>Users</dt><dd>2</dd>"));
    assert!(body.contains("href=\"/manager\""));
}

#[tokio::test]
async fn should_render_sample_servers_in_single_row() {
    let (status, body) = get(app(), "/manager").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"row\"").count(), 1);
    assert_eq!(body.matches("flex: 0 0 30%").count(), 3);
    for code in ["JP", "US", "CN"] {
        assert!(body.contains(code), "missing {code}");
    }
    assert!(!body.contains("jp-sample"));
}

#[tokio::test]
async fn should_wrap_sample_servers_when_columns_requested() {
    let (status, body) = get(app(), "/manager?columns=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"row\"").count(), 2);
    assert_eq!(body.matches("flex: 0 0 45%").count(), 3);
}

#[tokio::test]
async fn should_render_every_console_view() {
    let app = app();
    for (path, marker) in [
        ("/user", "Alice"),
        ("/admin", "admin@example.net"),
        ("/login", "type=\"password\""),
        ("/pricing", "99.00"),
    ] {
        let (status, body) = get(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.contains(marker), "{path} missing {marker}");
    }
}

#[tokio::test]
async fn should_redirect_unknown_path_home() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/settings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");
}

// ---------------------------------------------------------------------------
// API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_grid_layout_for_sample_servers() {
    let (status, body) = get(app(), "/api/servers/grid").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["columns_per_row"], 3);
    assert_eq!(json["card_flex_percent"], 30);
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["rows"][0][2]["id"], "CN");
}

#[tokio::test]
async fn should_reject_zero_columns_before_rendering() {
    let (status, body) = get(app(), "/api/servers/grid?columns=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["error"],
        "columns per row must be a positive integer, got 0"
    );
}

#[tokio::test]
async fn should_list_accounts_sorted_by_creation() {
    let (status, body) = get(app(), "/api/accounts?role=user").await;
    assert_eq!(status, StatusCode::OK);
    let json: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    let emails: Vec<&str> = json
        .iter()
        .map(|acc| acc["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["alice@example.net", "bob@example.net"]);
}

#[tokio::test]
async fn should_list_products_cheapest_first() {
    let (status, body) = get(app(), "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    let json: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = json
        .iter()
        .map(|product| product["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Monthly", "Quarterly", "Yearly"]);
}

// ---------------------------------------------------------------------------
// Seeded catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_empty_grid_for_empty_seed() {
    let app = wire(StaticCatalog::from_seed(&Seed::default()).unwrap());

    let (status, body) = get(app.clone(), "/manager").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"row\"").count(), 0);

    let (status, body) = get(app, "/api/servers/grid").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 0);
    assert_eq!(json["card_flex_percent"], 30);
}

#[tokio::test]
async fn should_serve_servers_from_custom_seed() {
    let seed = Seed::from_toml_str(
        r#"
        [[servers]]
        id = "HK"
        address = "hk.example.net"
        port = 443
        "#,
    )
    .unwrap();
    let app = wire(StaticCatalog::from_seed(&seed).unwrap());

    let (status, body) = get(app, "/api/servers/HK").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["address"], "hk.example.net");
    assert_eq!(json["port"], 443);
}
