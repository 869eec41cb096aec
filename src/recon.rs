// Recovers the two station ids from the vendor's serialized itinerary blob.
// Three strategies, strictly ordered: the structured detail response, then the
// `@L=` location markers of the HKI section, then the compact SC leg list.
// The first tier that yields both ids wins; exhausting all three is fatal.
use crate::server::infra::ApiError;
use crate::station::decode_station_id;
use crate::vendo::VerbindungDetails;
use anyhow::{Context, anyhow};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ReconIds {
    pub depart_id: String,
    pub arrival_id: String,
}

// Station ids in the HKI section are at least 7 digits; shorter @L= values
// are pool-internal references, not stations.
static HKI_LOCATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@L=(\d{7,})").unwrap());
static SC_SECTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"¶SC¶(\[[^¶]*\])").unwrap());

/// Leg record of the SC section: single-letter keys, `o` is the origin stop
/// id, `d` the destination stop id.
#[derive(Deserialize)]
struct ScLeg {
    o: String,
    d: String,
}

/// Try the tiers in order and short-circuit on the first success. Individual
/// tier failures are observed in the log but never surfaced; only exhaustion
/// of the whole chain is.
pub fn resolve(structured: anyhow::Result<ReconIds>, recon: &str) -> Result<ReconIds, ApiError> {
    let tiers = [
        ("structured", structured),
        ("hki", scan_hki(recon)),
        ("sc", scan_sc(recon)),
    ];
    for (tier, outcome) in tiers {
        match outcome {
            Ok(ids) => {
                info!(tier, depart_id = %ids.depart_id, arrival_id = %ids.arrival_id, "recon resolved");
                return Ok(ids);
            }
            Err(reason) => warn!(tier, "recon tier failed: {reason:#}"),
        }
    }
    Err(ApiError::ReconResolution)
}

/// Structured tier: first stop of the first leg and last stop of the last leg
/// of the first itinerary. Stop ids are composite location strings and go
/// through the station decoder.
pub fn from_details(details: &VerbindungDetails) -> anyhow::Result<ReconIds> {
    let itinerary = details
        .verbindungen
        .first()
        .context("no itineraries in detail response")?;
    let legs = &itinerary.verbindungs_abschnitte;
    let first_leg = legs.first().context("itinerary has no legs")?;
    let last_leg = legs.last().context("itinerary has no legs")?;
    let depart = first_leg.halte.first().context("first leg has no stops")?;
    let arrival = last_leg.halte.last().context("last leg has no stops")?;
    let depart_id =
        decode_station_id(Some(depart.id.as_str())).context("undecodable depart stop id")?;
    let arrival_id =
        decode_station_id(Some(arrival.id.as_str())).context("undecodable arrival stop id")?;
    Ok(ReconIds { depart_id, arrival_id })
}

/// HKI tier: the first two long location markers in the blob, in order of
/// appearance.
pub fn scan_hki(recon: &str) -> anyhow::Result<ReconIds> {
    let mut markers = HKI_LOCATION.captures_iter(recon);
    match (markers.next(), markers.next()) {
        (Some(depart), Some(arrival)) => Ok(ReconIds {
            depart_id: depart[1].to_string(),
            arrival_id: arrival[1].to_string(),
        }),
        _ => Err(anyhow!("fewer than two location markers in recon")),
    }
}

/// SC tier: the `¶SC¶` section carries a compact json array of legs. Most
/// fragile encoding, tried last. A present-but-malformed section is a tier
/// failure, never a guess.
pub fn scan_sc(recon: &str) -> anyhow::Result<ReconIds> {
    let section = SC_SECTION
        .captures(recon)
        .context("no SC section in recon")?;
    let legs: Vec<ScLeg> =
        serde_json::from_str(&section[1]).context("SC section is not a leg list")?;
    let first = legs.first().context("SC section has no legs")?;
    let last = legs.last().context("SC section has no legs")?;
    Ok(ReconIds {
        depart_id: first.o.clone(),
        arrival_id: last.d.clone(),
    })
}
