//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::Location;
use crate::planner::{OptimizationMode, OptimizationModeError};
use crate::store::{SegmentStore, StoreError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/routes", get(optimized_routes))
        .route("/api/routes/direct", get(direct_routes))
        .route("/api/routes/suggestions", get(route_suggestions))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    // The form still works without suggestions, so a store outage only
    // empties the picker.
    let locations = match state.store().locations().await {
        Ok(locations) => locations.into_iter().map(|l| l.to_string()).collect(),
        Err(e) => {
            warn!(error = %e, "failed to load locations for index page");
            Vec::new()
        }
    };

    let html = IndexTemplate { locations }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html).into_response())
}

/// List every location served by a published segment.
async fn list_locations(State(state): State<AppState>) -> Result<Json<LocationsResponse>, AppError> {
    let locations = state.store().locations().await?;

    Ok(Json(LocationsResponse {
        locations: locations.into_iter().map(|l| l.to_string()).collect(),
    }))
}

/// Direct routes only, in store order.
async fn direct_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let (from, to) = locations(&req);
    let routes = state.planner.find_direct_routes(&from, &to).await?;

    Ok(Json(RoutesResponse::from_routes(&routes)))
}

/// All candidate routes ordered by the requested optimization.
async fn optimized_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let mode = parse_mode(req.optimization.as_deref())?;
    let (from, to) = locations(&req);
    let routes = state.planner.find_optimized_routes(&from, &to, mode).await?;

    Ok(Json(RoutesResponse::from_routes(&routes)))
}

/// Top route suggestions with a status message.
async fn route_suggestions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteQuery>,
) -> Result<Response, AppError> {
    let mode = parse_mode(req.optimization.as_deref())?;
    let (from, to) = locations(&req);
    let suggestions = state.planner.get_route_suggestions(&from, &to, mode).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let html = RouteResultsTemplate::from_suggestions(&suggestions)
            .render()
            .map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(SuggestionsResponse::from_suggestions(&suggestions)).into_response())
    }
}

/// Origin and destination exactly as given.
fn locations(req: &RouteQuery) -> (Location, Location) {
    (Location::new(req.from.as_str()), Location::new(req.to.as_str()))
}

/// Parse the optional optimization parameter, defaulting to balanced.
fn parse_mode(raw: Option<&str>) -> Result<OptimizationMode, AppError> {
    raw.map(str::parse)
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(AppError::from)
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl From<OptimizationModeError> for AppError {
    fn from(e: OptimizationModeError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "bad request");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
