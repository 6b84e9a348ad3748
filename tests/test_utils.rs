use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use clashstats::{config::Config, context::AppContext, routes::create_router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
}

/// Mock Clash of Clans API used as the upstream for integration tests
fn mock_upstream() -> Router {
    Router::new()
        .route("/v1/clans", get(mock_clan_list))
        .route("/v1/clans/:tag", get(mock_clan_detail))
        .route("/v1/players/:tag", get(mock_player))
        .route("/v1/locations", get(mock_locations))
}

async fn mock_clan_list(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    // Echo locationId so tests can assert which listing was requested
    let location_id = params.get("locationId").cloned().unwrap_or_default();
    Json(json!({
        "items": [
            {
                "tag": "#RJ0J9JCG",
                "name": "Mock Clan One",
                "clanLevel": 10,
                "members": 42,
                "locationId": location_id
            },
            {
                "tag": "#CPLUCQ8",
                "name": "Mock & Clan <Two>",
                "clanLevel": 7,
                "members": 13,
                "locationId": location_id
            }
        ],
        "paging": { "cursors": {} }
    }))
}

async fn mock_clan_detail(Path(tag): Path<String>) -> impl IntoResponse {
    // Only a tag that was percent-encoded exactly once decodes back to
    // the canonical "#..." form here
    if tag == "#RJ0J9JCG" {
        (
            StatusCode::OK,
            Json(json!({
                "tag": "#RJ0J9JCG",
                "name": "Mock Clan One",
                "description": "A clan for integration tests",
                "clanLevel": 10,
                "clanPoints": 30000,
                "members": 42,
                "warWins": 250
            })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "reason": "notFound" })))
    }
}

async fn mock_player(Path(tag): Path<String>) -> impl IntoResponse {
    if tag == "#CPLUCQ8" {
        (
            StatusCode::OK,
            Json(json!({
                "tag": "#CPLUCQ8",
                "name": "Mock Player",
                "townHallLevel": 14,
                "trophies": 5200
            })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "reason": "notFound" })))
    }
}

async fn mock_locations() -> Json<Value> {
    Json(json!({
        "items": [
            { "id": 32000134, "name": "Iceland", "isCountry": true },
            { "id": 32000113, "name": "India", "isCountry": true }
        ],
        "paging": { "cursors": {} }
    }))
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_upstream(mock_upstream()).await
}

/// Spawn the service against a caller-provided upstream router
pub async fn spawn_app_with_upstream(upstream: Router) -> TestApp {
    let upstream_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let upstream_addr = upstream_listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(upstream_listener, upstream).await.unwrap();
    });

    spawn_app_with_base_url(format!("http://{}/v1", upstream_addr)).await
}

/// Spawn the service with an explicit upstream base URL
pub async fn spawn_app_with_base_url(base_url: String) -> TestApp {
    let config = Config {
        port: 0,
        api_key: "test-api-token".to_string(),
        coc_api_base_url: base_url,
        upstream_timeout_secs: 2,
        featured_clan_tag: "#RJ0J9JCG".to_string(),
        featured_player_tag: "#CPLUCQ8".to_string(),
        fwa_location_id: 32000134,
        india_location_id: 32000113,
        rust_log: "info".to_string(),
    };

    let app_context =
        Arc::new(AppContext::new(Arc::new(config)).expect("Failed to build app context"));
    let app = create_router(app_context);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address }
}
