// Router setup
use crate::handlers;
use crate::server::state::AppState;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, http};
use std::time;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tracing::error;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/journey", get(handlers::journey))
        .route("/healthy", get(handlers::healthy))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_: BoxError| async {
                    error!("Timed out");
                    (StatusCode::REQUEST_TIMEOUT, "Timed out. Sorry!".to_string())
                }))
                // Covers both outbound booking-service calls.
                .layer(TimeoutLayer::new(time::Duration::from_secs(15)))
                .layer(
                    CorsLayer::new()
                        .allow_methods([http::Method::GET])
                        .allow_origin(cors::Any),
                ),
        )
        .with_state(state)
}
