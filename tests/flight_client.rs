//! Flight price client against a local stand-in for the price API

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use snowtrip::config::FlightApiConfig;
use snowtrip::flights::fallback_flights;
use snowtrip::{
    FallbackReason, FlightLookup, FlightOffer, FlightPriceClient, FlightQuery, FlightSource,
};

const PRICES_PATH: &str = "/aviasales/v3/prices_for_dates";
const TOKEN: &str = "test-token-123456";

type Captured = Arc<Mutex<Option<HashMap<String, String>>>>;

async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}{PRICES_PATH}")
}

fn client(base_url: String, timeout_seconds: u64) -> FlightPriceClient {
    FlightPriceClient::new(&FlightApiConfig {
        api_token: Some(TOKEN.to_string()),
        base_url,
        timeout_seconds,
    })
    .unwrap()
}

fn query() -> FlightQuery {
    FlightQuery {
        origin: "LHR".to_string(),
        destination: "GVA".to_string(),
        departure_date: "2024-12-20".to_string(),
    }
}

fn assert_token_hidden(lookup: &FlightLookup) {
    let reason = lookup.fallback_reason().unwrap().to_string();
    assert!(!reason.contains(TOKEN), "token leaked: {reason}");
    assert!(!reason.contains("token="), "token leaked: {reason}");
}

fn respond_with(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        PRICES_PATH,
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

#[tokio::test]
async fn test_live_prices_are_mapped() {
    let captured: Captured = Arc::default();
    let app = Router::new()
        .route(
            PRICES_PATH,
            get(
                |State(captured): State<Captured>, Query(params): Query<HashMap<String, String>>| async move {
                    *captured.lock().unwrap() = Some(params);
                    Json(json!({
                        "success": true,
                        "data": [
                            {"price": 64, "airline": "U2", "flight_number": "8403", "duration": 95},
                            {"price": 131, "airline": "LX", "flight_number": 355}
                        ],
                        "currency": "gbp"
                    }))
                },
            ),
        )
        .with_state(captured.clone());
    let url = spawn_upstream(app).await;

    let lookup = client(url, 5).search(&query()).await;

    assert!(lookup.is_live());
    assert_eq!(
        lookup.offers(),
        &[
            FlightOffer::new("U2", "8403", "£64", "1h 35m", "Available"),
            FlightOffer::new("LX", "355", "£131", "2h 30m", "Available"),
        ]
    );

    let params = captured.lock().unwrap().clone().unwrap();
    assert_eq!(params["origin"], "LHR");
    assert_eq!(params["destination"], "GVA");
    assert_eq!(params["departure_at"], "2024-12-20");
    assert_eq!(params["currency"], "GBP");
    assert_eq!(params["token"], TOKEN);
    assert_eq!(params["limit"], "3");
    assert_eq!(params["one_way"], "true");
}

#[tokio::test]
async fn test_empty_data_uses_fallback() {
    let url = spawn_upstream(respond_with(
        StatusCode::OK,
        json!({"success": true, "data": []}),
    ))
    .await;

    let lookup = client(url, 5).search(&query()).await;

    assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::Empty));
    assert_eq!(lookup.offers(), fallback_flights().as_slice());
    assert_eq!(lookup.offers()[0].airline, "British Airways");
    assert_eq!(lookup.offers()[0].flight_number, "BA730");
    assert_eq!(lookup.offers()[0].price, "£145");
    assert_eq!(lookup.offers()[0].duration, "2h 30m");
    assert_eq!(lookup.offers()[0].status, "Scheduled");
}

#[tokio::test]
async fn test_null_data_uses_fallback() {
    let url = spawn_upstream(respond_with(
        StatusCode::OK,
        json!({"success": false, "data": null, "error": "no data"}),
    ))
    .await;

    let lookup = client(url, 5).search(&query()).await;

    assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::Empty));
}

#[tokio::test]
async fn test_http_error_uses_fallback() {
    let url = spawn_upstream(respond_with(
        StatusCode::UNAUTHORIZED,
        json!({"error": "Unauthorized"}),
    ))
    .await;

    let lookup = client(url, 5).search(&query()).await;

    assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::HttpStatus(401)));
    assert_eq!(lookup.offers().len(), 3);
}

#[tokio::test]
async fn test_malformed_body_uses_fallback() {
    let app = Router::new().route(PRICES_PATH, get(|| async { "<html>maintenance</html>" }));
    let url = spawn_upstream(app).await;

    let lookup = client(url, 5).search(&query()).await;

    assert!(matches!(
        lookup.fallback_reason(),
        Some(FallbackReason::Malformed(_))
    ));
    assert_eq!(lookup.offers(), fallback_flights().as_slice());
    assert_token_hidden(&lookup);
}

#[tokio::test]
async fn test_timeout_uses_fallback() {
    let app = Router::new().route(
        PRICES_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"data": [{"price": 1}]}))
        }),
    );
    let url = spawn_upstream(app).await;

    let lookup = client(url, 1).search(&query()).await;

    assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::Timeout));
    assert_eq!(lookup.offers(), fallback_flights().as_slice());
}

#[tokio::test]
async fn test_connection_refused_uses_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let lookup = client(format!("http://{addr}{PRICES_PATH}"), 2)
        .search(&query())
        .await;

    assert!(matches!(
        lookup.fallback_reason(),
        Some(FallbackReason::Network(_))
    ));
    assert_eq!(lookup.offers().len(), 3);
    assert_token_hidden(&lookup);
}

#[tokio::test]
async fn test_odd_item_keeps_other_live_offers() {
    let url = spawn_upstream(respond_with(
        StatusCode::OK,
        json!({
            "success": true,
            "data": [
                {"price": 64, "airline": "U2", "flight_number": "8403", "duration": 95},
                {"price": "131", "airline": null, "flight_number": 355, "duration": "110"},
                "not an object"
            ]
        }),
    ))
    .await;

    let lookup = client(url, 5).search(&query()).await;

    assert!(lookup.is_live());
    assert_eq!(
        lookup.offers(),
        &[
            FlightOffer::new("U2", "8403", "£64", "1h 35m", "Available"),
            FlightOffer::new("Unknown", "355", "£131", "1h 50m", "Available"),
            FlightOffer::new("Unknown", "N/A", "£100", "2h 30m", "Available"),
        ]
    );
}
