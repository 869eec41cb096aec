// Infrastructure concerns: error taxonomy, response mapping, signals
use crate::api::ExtractionFailure;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};

/// Everything that can go wrong between a caller's URL and a journey record.
/// Decode-level problems never reach this type; the decoders degrade to null
/// fields instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-caused: the input url or its vbid is absent.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// Booking service unreachable or returned a schema-invalid payload.
    /// Transient; the caller may retry.
    #[error("booking service request failed: {0}")]
    UpstreamFetch(anyhow::Error),
    /// All recon tiers exhausted: the itinerary blob is in an unsupported
    /// format. Not retriable without a code change.
    #[error("unable to recover station ids from the itinerary recon")]
    ReconResolution,
    /// Malformed deep-link URL; the payload is returned to the caller as-is.
    #[error("{0}")]
    Extraction(ExtractionFailure),
    /// Both decoders ran but a station id is still missing.
    #[error("journey details incomplete: missing station id")]
    IncompleteJourney,
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::UpstreamFetch(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::UpstreamFetch(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Error: {self}");
        let status = match &self {
            ApiError::MissingParameter(_) | ApiError::Extraction(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::ReconResolution | ApiError::IncompleteJourney => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = match self {
            ApiError::Extraction(failure) => json!(failure),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .expect("Unable to set signal handler for Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
