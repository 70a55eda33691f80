//! Route definitions for the Hearth HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(property_routes())
        .merge(agent_routes())
        .merge(review_routes())
        .merge(inquiry_routes())
        .merge(contact_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Property listings: public reads, owner-gated mutations
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list))
        .route("/properties", post(handlers::property::create))
        .route("/properties/{id}", get(handlers::property::get))
        .route("/properties/{id}", put(handlers::property::update))
        .route("/properties/{id}", delete(handlers::property::delete))
}

/// Agent directory CRUD
fn agent_routes() -> Router<AppState> {
    Router::new()
        .route("/agents", get(handlers::agent::list))
        .route("/agents", post(handlers::agent::create))
        .route("/agents/{id}", get(handlers::agent::get))
        .route("/agents/{id}", put(handlers::agent::update))
        .route("/agents/{id}", delete(handlers::agent::delete))
}

/// Review submission and per-target listing
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(handlers::review::create))
        .route("/reviews/agent/{id}", get(handlers::review::by_agent))
        .route(
            "/reviews/property/{id}",
            get(handlers::review::by_property),
        )
}

/// Seller inquiry intake
fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/seller-inquiries", post(handlers::inquiry::create))
        .route("/seller-inquiries", get(handlers::inquiry::list))
}

/// Contact form intake
fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(handlers::contact::create))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors.allow_methods(methods)
}
