pub mod agent;
pub mod assets;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod session;

pub use config::Config;
pub use routes::AppState;

use axum::Router;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Router with every layer the server runs with
///
/// Shared by `serve` and the integration tests.
pub fn create_app(state: AppState) -> Router {
    routes::router(state)
        // no-store for pages and API responses, long-lived for static files
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
