// Pulls a journey query out of a deep-link URL fragment. The fragment is a
// query string carrying soid/zoid (station tokens), hd (date or date-time),
// ht (bare time, lower priority) and kl (fare class).
use crate::api::{ExtractionFailure, JourneyDetails};
use crate::datetime::decode_date_time;
use crate::station::{decode_station_id, decode_station_name};
use url::Url;
use url::form_urlencoded;

pub const EXTRACTION_ERROR: &str = "failed to extract journey details from URL";

pub fn extraction_failure(details: impl ToString) -> ExtractionFailure {
    ExtractionFailure {
        error: EXTRACTION_ERROR.to_string(),
        details: Some(details.to_string()),
    }
}

/// Build a journey-detail record from a deep-link URL. Pure, no I/O. Only a
/// malformed URL is an error; anything undecodable inside the fragment just
/// leaves fields unset.
pub fn extract_journey_details(raw: &str) -> Result<JourneyDetails, ExtractionFailure> {
    let url = Url::parse(raw).map_err(extraction_failure)?;
    let fragment = url.fragment().unwrap_or("");
    // First occurrence of a key wins, like URLSearchParams.get.
    let field = |name: &str| -> Option<String> {
        form_urlencoded::parse(fragment.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    };

    let soid = field("soid");
    let zoid = field("zoid");
    let mut details = JourneyDetails {
        from_station: decode_station_name(soid.as_deref()),
        from_station_id: decode_station_id(soid.as_deref()),
        to_station: decode_station_name(zoid.as_deref()),
        to_station_id: decode_station_id(zoid.as_deref()),
        ..Default::default()
    };

    // A combined date-time in hd outranks the separate ht token.
    let hd = decode_date_time(field("hd").as_deref());
    details.date = hd.date;
    if details.time.is_none() {
        details.time = hd.time;
    }
    if details.time.is_none() {
        details.time = field("ht").filter(|time| !time.is_empty());
    }
    details.class = field("kl").and_then(|kl| kl.parse::<i64>().ok());

    Ok(details)
}
