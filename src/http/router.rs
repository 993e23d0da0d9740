//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing,
//! the powered-by response header), and creates the axum router ready for
//! serving.

use axum::{
    http::{HeaderName, HeaderValue},
    routing::{get, patch},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Value of the `X-Powered-By` header on tagged routes.
pub const POWERED_BY: &str = "bookshelf";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Single-book reads advertise the service via X-Powered-By. The header
    // layer is scoped to this route group only.
    let tagged = Router::new()
        .route("/books/{id}", get(handlers::get_book))
        .route_layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-powered-by"),
            HeaderValue::from_static(POWERED_BY),
        ));

    // Combine all routes
    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/{id}", patch(handlers::update_book))
        .merge(tagged)
        .route("/health", get(handlers::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
