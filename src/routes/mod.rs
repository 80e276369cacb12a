use axum::{
    http::Method,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::flights;
use crate::middleware::logging::log_request;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Only the configured frontend origin may call the API from a browser
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/flights", get(flights::list_flights))
        .route("/api/flights/{id}", get(flights::get_flight))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}
