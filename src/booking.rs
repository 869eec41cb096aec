// Exchanges a booking reference (vbid) for a deep-link URL. The booking
// service is asked twice: the initial lookup yields the recon blob and the
// session cookies, the follow-up detail call feeds the structured recon tier.
// The calls are sequential, never retried; the tier chain in the recon module
// is a parsing fallback, not a network one.
use crate::recon::{self, ReconIds};
use crate::server::infra::ApiError;
use crate::server::state::AppState;
use crate::vendo::{VerbindungDetails, VerbindungResponse};
use anyhow::Context;
use http::HeaderMap;
use http::header::{ACCEPT, COOKIE, SET_COOKIE};
use tracing::{info, instrument};
use url::{Url, form_urlencoded};

pub const BOOKING_API_URL: &str = "https://www.bahn.de/web/api";
pub const DEEPLINK_URL: &str = "https://www.bahn.de/buchung/fahrplan/suche";

/// The `vbid` query parameter, when the URL carries one.
pub fn booking_reference(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "vbid")
        .map(|(_, value)| value.into_owned())
}

/// Resolve a booking-reference URL into an equivalent deep-link URL, so the
/// downstream fragment extractor can treat both inputs uniformly.
#[instrument(name = "resolve_booking", skip_all)]
pub async fn resolve(state: &AppState, url: &Url) -> Result<Url, ApiError> {
    let vbid = booking_reference(url).ok_or(ApiError::MissingParameter("vbid"))?;
    info!("Resolve booking reference {vbid}");

    let lookup = state
        .client
        .get(format!("{}/angebote/verbindung/{vbid}", state.api_url))
        .header(ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?;
    let cookies = forwardable_cookies(lookup.headers());
    let payload: VerbindungResponse = lookup.json().await.map_err(|reason| {
        ApiError::UpstreamFetch(
            anyhow::Error::new(reason).context("booking payload failed schema validation"),
        )
    })?;

    let structured = match fetch_details(state, &vbid, &cookies).await {
        Ok(details) => recon::from_details(&details),
        Err(reason) => Err(reason),
    };
    let ids = recon::resolve(structured, &payload.hinfahrt_recon)?;

    Ok(deeplink(&ids, payload.hinfahrt_datum.as_deref()))
}

/// The richer itinerary-detail call behind the structured recon tier. Session
/// cookies from the lookup response must be forwarded or the service answers
/// with an anonymous, itinerary-free payload.
async fn fetch_details(
    state: &AppState,
    vbid: &str,
    cookies: &[String],
) -> anyhow::Result<VerbindungDetails> {
    let mut request = state
        .client
        .get(format!("{}/angebote/verbindung/{vbid}/reise", state.api_url))
        .header(ACCEPT, "application/json");
    for cookie in cookies {
        request = request.header(COOKIE, cookie.as_str());
    }
    let details = request
        .send()
        .await?
        .error_for_status()?
        .json()
        .await
        .context("detail payload failed schema validation")?;
    Ok(details)
}

fn deeplink(ids: &ReconIds, outbound_date: Option<&str>) -> Url {
    let mut url = Url::parse(DEEPLINK_URL).expect("deep-link base is a valid URL");
    let mut fragment = form_urlencoded::Serializer::new(String::new());
    fragment.append_pair("soid", &ids.depart_id);
    fragment.append_pair("zoid", &ids.arrival_id);
    if let Some(date) = outbound_date {
        fragment.append_pair("hd", date);
    }
    url.set_fragment(Some(&fragment.finish()));
    url
}

/// Produce forwardable `name=value` cookie strings from a response header map.
pub trait CookieForwarder {
    fn forwardable(&self, headers: &HeaderMap) -> Vec<String>;
}

/// Header maps that expose each `Set-Cookie` value separately, the common
/// case.
pub struct MultiValueCookies;

impl CookieForwarder for MultiValueCookies {
    fn forwardable(&self, headers: &HeaderMap) -> Vec<String> {
        headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(cookie_pair)
            .collect()
    }
}

/// Best effort for header maps behind proxies that fold every cookie into one
/// comma-joined value.
pub struct FoldedCookieFallback;

impl CookieForwarder for FoldedCookieFallback {
    fn forwardable(&self, headers: &HeaderMap) -> Vec<String> {
        let Some(folded) = headers.get(SET_COOKIE).and_then(|value| value.to_str().ok()) else {
            return Vec::new();
        };
        folded.split(',').filter_map(cookie_pair).collect()
    }
}

// Keep the `name=value` pair, drop the attributes after the first ';'.
fn cookie_pair(value: &str) -> Option<String> {
    let pair = value.split(';').next()?.trim();
    if pair.contains('=') {
        Some(pair.to_string())
    } else {
        None
    }
}

/// Capability detection at the boundary: a single header value that visibly
/// carries several folded cookie pairs selects the fallback splitter.
pub fn forwardable_cookies(headers: &HeaderMap) -> Vec<String> {
    let mut values = headers.get_all(SET_COOKIE).iter();
    let folded = match (values.next(), values.next()) {
        (Some(only), None) => only
            .to_str()
            .is_ok_and(|value| value.split(',').filter(|part| part.contains('=')).count() > 1),
        _ => false,
    };
    if folded {
        FoldedCookieFallback.forwardable(headers)
    } else {
        MultiValueCookies.forwardable(headers)
    }
}
