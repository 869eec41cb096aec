// Journey detail assembly: booking references are first exchanged for a
// deep-link URL, then every input goes through the same fragment extractor.
use crate::api::JourneyDetails;
use crate::booking;
use crate::hash;
use crate::server::infra::ApiError;
use crate::server::state::AppState;
use tracing::{info, instrument};
use url::Url;

/// Resolve either kind of input URL into a complete journey record. A record
/// missing either station id is a server-side failure, not a partial answer.
#[instrument(name = "resolve_journey", skip_all)]
pub async fn resolve_journey(state: &AppState, raw_url: &str) -> Result<JourneyDetails, ApiError> {
    let url = Url::parse(raw_url)
        .map_err(|reason| ApiError::Extraction(hash::extraction_failure(reason)))?;
    let url = if booking_reference_input(&url) {
        booking::resolve(state, &url).await?
    } else {
        url
    };

    let details = hash::extract_journey_details(url.as_str()).map_err(ApiError::Extraction)?;
    if details.from_station_id.is_none() || details.to_station_id.is_none() {
        return Err(ApiError::IncompleteJourney);
    }
    info!("{}", details.summary());
    Ok(details)
}

fn booking_reference_input(url: &Url) -> bool {
    booking::booking_reference(url).is_some()
}
