//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::warn;

use crate::query::{BusQuery, query_buses};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/buses", get(list_buses))
        .route("/api/buses/:number", get(get_bus))
        .route("/api/routes", get(list_routes))
        .route("/api/suggestions", get(suggestions))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Filtered, searched and sorted buses.
async fn list_buses(
    State(state): State<AppState>,
    Query(params): Query<BusQuery>,
) -> Json<Vec<BusRecord>> {
    let snapshot = state.snapshot().await;
    let buses = query_buses(snapshot.fleet.buses(), &params, state.stops());

    Json(
        buses
            .iter()
            .map(|b| BusRecord::from_state(b, snapshot.updated_at))
            .collect(),
    )
}

/// One bus by number.
async fn get_bus(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<BusRecord>, AppError> {
    let snapshot = state.snapshot().await;
    let bus = snapshot
        .fleet
        .get_by_number(&number)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no bus numbered {number}"),
        })?;

    Ok(Json(BusRecord::from_state(bus, snapshot.updated_at)))
}

/// Distinct routes, for the route filter.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<String>> {
    let snapshot = state.snapshot().await;
    Json(
        snapshot
            .fleet
            .route_options()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

#[derive(Debug, Deserialize)]
struct SuggestionRequest {
    #[serde(default)]
    q: String,
}

/// Autocomplete over bus numbers, routes and stops.
async fn suggestions(
    State(state): State<AppState>,
    Query(req): Query<SuggestionRequest>,
) -> Json<Vec<String>> {
    let snapshot = state.snapshot().await;
    Json(
        snapshot
            .fleet
            .suggestions(&req.q)
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CachedBusClient};
    use crate::catalog::RouteCatalog;
    use crate::client::{ApiError, BusApiClient, BusApiConfig};
    use crate::domain::BusStatus;
    use crate::domain::test_support::bus;
    use crate::query::Fleet;
    use chrono::{Local, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Serve the app on an ephemeral port and return its API base URL.
    async fn serve() -> String {
        let catalog = RouteCatalog::load().unwrap();
        serve_state(AppState::new(catalog.routes().to_vec(), &mut StdRng::seed_from_u64(1))).await
    }

    async fn serve_state(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, create_router(state)).await.unwrap();
        });

        format!("http://{addr}/api")
    }

    fn client(base: &str) -> BusApiClient {
        BusApiClient::new(BusApiConfig::new(base)).unwrap()
    }

    #[tokio::test]
    async fn fetch_all_buses() {
        let base = serve().await;
        let buses = client(&base).fetch_buses(&BusQuery::default()).await.unwrap();

        let expected: usize = RouteCatalog::load()
            .unwrap()
            .routes()
            .iter()
            .map(|r| r.stops().len())
            .sum();
        assert_eq!(buses.len(), expected);
        assert!(buses.iter().all(|b| b.status == BusStatus::OnTime));
        assert!(buses.iter().all(|b| (5..40).contains(&b.occupancy)));
        assert_eq!(buses[0].id.as_deref(), Some("VV-1-1"));
    }

    #[tokio::test]
    async fn fetch_with_filters_and_sort() {
        let base = serve().await;
        let query = BusQuery::default().with_route("VV-13").with_sort("eta");
        let buses = client(&base).fetch_buses(&query).await.unwrap();

        assert_eq!(buses.len(), 14);
        assert!(buses.iter().all(|b| b.route == "VV-13"));
        assert!(buses.windows(2).all(|w| w[0].eta_minutes <= w[1].eta_minutes));
        assert_eq!(buses[0].eta_minutes, 0);
    }

    #[tokio::test]
    async fn unknown_status_matches_nothing() {
        let base = serve().await;
        let query = BusQuery::default().with_status("emergency");
        let buses = client(&base).fetch_buses(&query).await.unwrap();
        assert!(buses.is_empty());
    }

    #[tokio::test]
    async fn route_options_lists_catalog_order() {
        let base = serve().await;
        let routes = client(&base).route_options().await.unwrap();
        assert_eq!(routes.len(), 16);
        assert_eq!(routes[0], "VV-1");
    }

    #[tokio::test]
    async fn missing_bus_is_json_404() {
        let base = serve().await;
        let response = reqwest::get(format!("{base}/buses/VV-99")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "no bus numbered VV-99");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let base = serve().await;
        let root = base.trim_end_matches("/api");
        let body = reqwest::get(format!("{root}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn suggestions_need_two_characters() {
        let base = serve().await;
        let one: Vec<String> = reqwest::get(format!("{base}/suggestions?q=V"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(one.is_empty());

        let two: Vec<String> = reqwest::get(format!("{base}/suggestions?q=VV"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(two.iter().any(|s| s == "VV-1"));
    }

    #[tokio::test]
    async fn non_json_body_is_json_error() {
        let app = Router::new().route("/buses", get(|| async { "not json" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let err = client(&format!("http://{addr}"))
            .fetch_buses(&BusQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Json { .. }));
    }

    #[tokio::test]
    async fn error_status_is_api_error() {
        let base = serve().await;
        let root = base.trim_end_matches("/api");
        let err = client(&format!("{root}/nowhere"))
            .fetch_buses(&BusQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn cached_client_reuses_normalized_queries() {
        let base = serve().await;
        let cached = CachedBusClient::new(client(&base), &CacheConfig::default());

        let first = cached.fetch_buses(&BusQuery::text("VV-1")).await.unwrap();
        let second = cached.fetch_buses(&BusQuery::text("  vv-1 ")).await.unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));

        cached.invalidate_cache();
        let third = cached.fetch_buses(&BusQuery::text("VV-1")).await.unwrap();
        assert!(!std::sync::Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
    }

    #[tokio::test]
    async fn delayed_bus_on_the_wire() {
        let catalog = RouteCatalog::load().unwrap();
        let fleet = Fleet::new(vec![bus("VV-1", "VV-1").with_delay(20), bus("VV-2", "VV-2")]);
        let updated_at = Local.with_ymd_and_hms(2024, 5, 3, 7, 0, 0).unwrap();
        let base =
            serve_state(AppState::with_fleet(catalog.routes().to_vec(), fleet, updated_at)).await;

        let body: serde_json::Value = reqwest::get(format!("{base}/buses/VV-1"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "delayed");
        assert_eq!(body["delay_minutes"], 20);
        assert_eq!(body["last_update"], updated_at.to_rfc3339());

        // The raw client skips the cache, so nothing is stored
        let cached = CachedBusClient::new(
            client(&base),
            &CacheConfig::default().with_ttl(std::time::Duration::from_secs(1)),
        );
        let delayed = cached
            .client()
            .fetch_buses(&BusQuery::default().with_status("delayed"))
            .await
            .unwrap();
        assert_eq!(delayed.len(), 1);
        assert_eq!(delayed[0].number, "VV-1");
        assert_eq!(delayed[0].delay, 20);
        assert_eq!(cached.cache_entry_count(), 0);
    }
}
