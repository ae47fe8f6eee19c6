use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Filter catalog
        .route("/filters", get(handlers::get_filters))
        // Stateless recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        // Screen view state
        .route("/screen", get(handlers::get_screen))
        .route("/screen/events", post(handlers::post_screen_event))
        .route("/screen/fetch", post(handlers::post_screen_fetch))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
