//! labread-lambda
//!
//! HTTP surface for the interpreter, served from AWS Lambda or locally.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the router with all routes and layers applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/catalog", get(routes::catalog::list_catalog))
        .route("/catalog/{term}", get(routes::catalog::get_catalog_term))
        .route("/api/simplify", post(routes::simplify::simplify))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
