use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::SnowTripConfig;
use crate::flights::FlightPriceClient;
use crate::models::TripRequest;
use crate::planner::{PageView, TripPlanner};
use crate::render::render_page;

/// Form posts are a handful of short fields
const MAX_FORM_BYTES: usize = 16 * 1024;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<TripPlanner>,
}

/// Raw search form fields
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub origin: String,
    pub dest: String,
    pub date: String,
    pub skill: String,
    pub budget: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_search))
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn show_form() -> Html<String> {
    Html(render_page(&PageView::Form))
}

async fn submit_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, StatusCode> {
    let request = TripRequest::from_fields(
        &form.origin,
        &form.dest,
        &form.date,
        &form.skill,
        &form.budget,
    )
    .map_err(|e| {
        tracing::warn!("Rejecting search: {}", e);
        StatusCode::BAD_REQUEST
    })?;

    let view = state.planner.results_page(request).await;
    Ok(Html(render_page(&view)))
}

/// Build the planner from configuration
pub fn build_state(config: &SnowTripConfig) -> Result<AppState> {
    let flights = FlightPriceClient::new(&config.flights)?;
    let planner = TripPlanner::with_nights(Arc::new(flights), config.trip.nights);
    Ok(AppState {
        planner: Arc::new(planner),
    })
}

pub async fn run(config: &SnowTripConfig) -> Result<()> {
    let app = router(build_state(config)?);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        "Web server running at http://localhost:{} (debug: {})",
        config.server.port,
        config.server.debug
    );
    axum::serve(listener, app)
        .await
        .with_context(|| "Web server stopped unexpectedly")?;
    Ok(())
}
