//! Route definitions for the JobTrail HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(application_routes())
        .merge(document_routes())
        .merge(notification_routes())
        .merge(profile_routes())
        .merge(stats_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Application CRUD and per-application documents
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/applications", get(handlers::application::list_applications))
        .route("/applications", post(handlers::application::create_application))
        .route("/applications/{id}", get(handlers::application::get_application))
        .route("/applications/{id}", put(handlers::application::update_application))
        .route(
            "/applications/{id}",
            delete(handlers::application::delete_application),
        )
        .route(
            "/applications/{id}/documents",
            get(handlers::document::list_documents),
        )
        .route(
            "/applications/{id}/documents",
            post(handlers::document::create_document),
        )
}

/// Standalone document operations
fn document_routes() -> Router<AppState> {
    Router::new().route("/documents/{id}", delete(handlers::document::delete_document))
}

/// Notification list, counts, and read state
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list_notifications))
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Profile self-service endpoints
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile", put(handlers::profile::update_profile))
}

/// Aggregate statistics
fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(handlers::stats::get_stats))
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors = &state.config.server.cors;

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let mut layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers(Any)
        .max_age(Duration::from_secs(cors.max_age_seconds));

    if cors.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer
}
