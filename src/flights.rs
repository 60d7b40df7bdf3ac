//! Flight price client for the Travelpayouts price search API
//!
//! A search makes exactly one bounded request. Any failure (missing token,
//! network error, timeout, non-2xx status, undecodable body, no results)
//! yields the fixed fallback flights, tagged with the reason, so callers can
//! tell live prices from fallback data.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::FlightApiConfig;
use crate::models::flight::{format_duration, format_price};
use crate::models::{FlightOffer, TripRequest};

/// Currency requested from the API
pub const CURRENCY: &str = "GBP";

/// Maximum offers requested per search
pub const RESULT_LIMIT: u32 = 3;

const DEFAULT_PRICE: u32 = 100;
const DEFAULT_DURATION_MINUTES: i64 = 150;
const LIVE_STATUS: &str = "Available";

/// Route and date to price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    /// ISO departure date, passed through as submitted
    pub departure_date: String,
}

impl From<&TripRequest> for FlightQuery {
    fn from(request: &TripRequest) -> Self {
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            departure_date: request.date.clone(),
        }
    }
}

/// Why fallback flights were returned instead of live prices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    #[error("no API token configured")]
    MissingToken,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no flights returned")]
    Empty,
}

impl FallbackReason {
    /// The request URL carries the API token, so it is stripped before the
    /// error text is kept or logged.
    fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            FallbackReason::Timeout
        } else if err.is_decode() {
            FallbackReason::Malformed(err.to_string())
        } else {
            FallbackReason::Network(err.to_string())
        }
    }
}

/// Outcome of a flight search
#[derive(Debug, Clone, PartialEq)]
pub enum FlightLookup {
    /// Offers priced by the API
    Live(Vec<FlightOffer>),
    /// Fixed fallback offers
    Fallback {
        offers: Vec<FlightOffer>,
        reason: FallbackReason,
    },
}

impl FlightLookup {
    /// Fallback offers tagged with `reason`
    #[must_use]
    pub fn fallback(reason: FallbackReason) -> Self {
        FlightLookup::Fallback {
            offers: fallback_flights(),
            reason,
        }
    }

    #[must_use]
    pub fn offers(&self) -> &[FlightOffer] {
        match self {
            FlightLookup::Live(offers) | FlightLookup::Fallback { offers, .. } => offers,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, FlightLookup::Live(_))
    }

    #[must_use]
    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            FlightLookup::Live(_) => None,
            FlightLookup::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Flights shown when live prices are unavailable
#[must_use]
pub fn fallback_flights() -> Vec<FlightOffer> {
    vec![
        FlightOffer::new("British Airways", "BA730", "£145", "2h 30m", "Scheduled"),
        FlightOffer::new("easyJet", "U22433", "£89", "2h 45m", "Available"),
        FlightOffer::new("Swiss", "LX345", "£198", "1h 50m", "On Time"),
    ]
}

/// Anything that can price flights for the planner
#[async_trait]
pub trait FlightSource: Send + Sync {
    /// Price flights for `query`. Never fails; degraded results carry a
    /// fallback reason.
    async fn search(&self, query: &FlightQuery) -> FlightLookup;
}

/// Price search response body
#[derive(Debug, Deserialize)]
struct PricesResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

/// One priced ticket in the API response. Fields are kept loosely typed so
/// an oddly shaped item only loses its own values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiFlight {
    price: Option<Value>,
    airline: Option<Value>,
    flight_number: Option<Value>,
    /// Minutes
    duration: Option<Value>,
}

/// Display text of a payload field; `null` counts as absent
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn field_minutes(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|m| m.floor() as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl ApiFlight {
    fn into_offer(self) -> FlightOffer {
        let minutes = field_minutes(self.duration.as_ref()).unwrap_or(DEFAULT_DURATION_MINUTES);

        FlightOffer {
            airline: field_text(self.airline).unwrap_or_else(|| "Unknown".to_string()),
            flight_number: field_text(self.flight_number).unwrap_or_else(|| "N/A".to_string()),
            price: field_text(self.price)
                .map_or_else(|| format_price(DEFAULT_PRICE), format_price),
            duration: format_duration(minutes),
            status: LIVE_STATUS.to_string(),
        }
    }
}

/// Travelpayouts price search client
pub struct FlightPriceClient {
    client: Client,
    api_token: Option<String>,
    base_url: String,
}

impl FlightPriceClient {
    /// Create a new client; the token is taken from `config`
    pub fn new(config: &FlightApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("SnowTrip/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_token: config.api_token.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Search prices for `query`, falling back to fixed flights on failure
    #[instrument(
        skip(self),
        fields(origin = %query.origin, destination = %query.destination, date = %query.departure_date)
    )]
    pub async fn search_prices(&self, query: &FlightQuery) -> FlightLookup {
        let Some(token) = self.api_token.as_deref() else {
            warn!("No flight API token configured, using fallback flights");
            return FlightLookup::fallback(FallbackReason::MissingToken);
        };

        let start_time = Instant::now();
        match self.fetch(query, token).await {
            Ok(offers) if offers.is_empty() => {
                info!(
                    "No flights from API (date may be too far or no schedules), using fallback flights"
                );
                FlightLookup::fallback(FallbackReason::Empty)
            }
            Ok(offers) => {
                info!(
                    "Found {} live flights in {:.3}s",
                    offers.len(),
                    start_time.elapsed().as_secs_f64()
                );
                FlightLookup::Live(offers)
            }
            Err(reason) => {
                warn!("Flight API error: {}, using fallback flights", reason);
                FlightLookup::fallback(reason)
            }
        }
    }

    async fn fetch(
        &self,
        query: &FlightQuery,
        token: &str,
    ) -> std::result::Result<Vec<FlightOffer>, FallbackReason> {
        debug!(
            "Fetching flights: {} -> {} on {} (currency {}, limit {}, one way)",
            query.origin, query.destination, query.departure_date, CURRENCY, RESULT_LIMIT
        );

        let limit = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", query.origin.as_str()),
                ("destination", query.destination.as_str()),
                ("departure_at", query.departure_date.as_str()),
                ("currency", CURRENCY),
                ("token", token),
                ("limit", limit.as_str()),
                ("one_way", "true"),
            ])
            .send()
            .await
            .map_err(FallbackReason::from_reqwest)?;

        let status = response.status();
        debug!("Flight API responded with {}", status);
        if !status.is_success() {
            return Err(FallbackReason::HttpStatus(status.as_u16()));
        }

        let body: PricesResponse = response.json().await.map_err(FallbackReason::from_reqwest)?;

        Ok(body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                // Non-object items keep every field at its default
                serde_json::from_value::<ApiFlight>(item)
                    .unwrap_or_default()
                    .into_offer()
            })
            .collect())
    }
}

#[async_trait]
impl FlightSource for FlightPriceClient {
    async fn search(&self, query: &FlightQuery) -> FlightLookup {
        self.search_prices(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> FlightQuery {
        FlightQuery {
            origin: "LHR".to_string(),
            destination: "GVA".to_string(),
            departure_date: "2024-12-20".to_string(),
        }
    }

    #[test]
    fn test_fallback_flights_are_fixed() {
        let flights = fallback_flights();
        assert_eq!(flights.len(), 3);
        assert_eq!(
            flights[0],
            FlightOffer::new("British Airways", "BA730", "£145", "2h 30m", "Scheduled")
        );
        assert_eq!(flights[1].airline, "easyJet");
        assert_eq!(flights[1].flight_number, "U22433");
        assert_eq!(flights[2].status, "On Time");
    }

    #[test]
    fn test_api_item_mapping() {
        let body: PricesResponse = serde_json::from_str(
            r#"{"success": true, "data": [
                {"price": 57, "airline": "U2", "flight_number": "8403", "duration": 95, "departure_at": "2024-12-20T06:15:00+00:00"},
                {"price": 120, "airline": "LX", "flight_number": 317, "duration": 100}
            ]}"#,
        )
        .unwrap();

        let offers: Vec<FlightOffer> = body
            .data
            .unwrap()
            .into_iter()
            .map(|item| serde_json::from_value::<ApiFlight>(item).unwrap().into_offer())
            .collect();

        assert_eq!(
            offers[0],
            FlightOffer::new("U2", "8403", "£57", "1h 35m", "Available")
        );
        assert_eq!(offers[1].flight_number, "317");
        assert_eq!(offers[1].duration, "1h 40m");
    }

    #[test]
    fn test_api_item_defaults() {
        let item: ApiFlight = serde_json::from_str(r#"{"flight_number": null}"#).unwrap();
        let offer = item.into_offer();
        assert_eq!(
            offer,
            FlightOffer::new("Unknown", "N/A", "£100", "2h 30m", "Available")
        );
    }

    #[test]
    fn test_odd_field_types_are_tolerated() {
        let item: ApiFlight = serde_json::from_str(
            r#"{"price": "131", "airline": 42, "flight_number": 317, "duration": "125"}"#,
        )
        .unwrap();
        assert_eq!(
            item.into_offer(),
            FlightOffer::new("42", "317", "£131", "2h 5m", "Available")
        );

        let item: ApiFlight =
            serde_json::from_str(r#"{"price": null, "duration": [1, 2]}"#).unwrap();
        let offer = item.into_offer();
        assert_eq!(offer.price, "£100");
        assert_eq!(offer.duration, "2h 30m");
    }

    #[test]
    fn test_missing_data_is_empty() {
        let body: PricesResponse =
            serde_json::from_str(r#"{"success": false, "data": null, "error": "x"}"#).unwrap();
        assert!(body.data.unwrap_or_default().is_empty());

        let body: PricesResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.data.is_none());
    }

    #[test]
    fn test_lookup_accessors() {
        let lookup = FlightLookup::fallback(FallbackReason::Timeout);
        assert!(!lookup.is_live());
        assert_eq!(lookup.offers(), fallback_flights().as_slice());
        assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::Timeout));

        let live = FlightLookup::Live(vec![FlightOffer::new(
            "A",
            "1",
            "£1",
            "0h 1m",
            "Available",
        )]);
        assert!(live.is_live());
        assert_eq!(live.offers().len(), 1);
        assert!(live.fallback_reason().is_none());
    }

    #[tokio::test]
    async fn test_missing_token_skips_request() {
        let config = FlightApiConfig {
            api_token: None,
            // Unroutable; never contacted
            base_url: "http://127.0.0.1:9/prices".to_string(),
            timeout_seconds: 1,
        };
        let client = FlightPriceClient::new(&config).unwrap();

        let lookup = client.search(&query()).await;
        assert_eq!(lookup.fallback_reason(), Some(&FallbackReason::MissingToken));
        assert_eq!(lookup.offers().len(), 3);
    }

    #[test]
    fn test_fallback_reason_messages() {
        assert_eq!(FallbackReason::HttpStatus(401).to_string(), "HTTP status 401");
        assert_eq!(FallbackReason::Empty.to_string(), "no flights returned");
    }
}
