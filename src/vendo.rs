// The booking service's JSON payloads, as far as this tool reads them. Typed
// deserialization doubles as schema validation: a payload missing required
// fields is rejected before any recon work starts. Fields we have seen but do
// not use yet are kept behind allow(dead_code) so the shape stays documented.
use serde::Deserialize;

/// Initial lookup response for a booking reference
/// (`/angebote/verbindung/{vbid}`).
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerbindungResponse {
    /// Serialized outbound itinerary blob. Carries the two station ids in
    /// several competing encodings; see the recon module.
    pub hinfahrt_recon: String,
    /// Outbound travel date token, forwarded verbatim as the deep-link `hd`
    /// field when present.
    pub hinfahrt_datum: Option<String>,
    /// Return-leg blob, present for round trips. Unused: only the first and
    /// last stop of the outbound itinerary matter here.
    #[allow(dead_code)]
    pub rueckfahrt_recon: Option<String>,
}

/// Richer itinerary detail (`/angebote/verbindung/{vbid}/reise`), consumed by
/// the structured recon tier.
#[derive(Deserialize, Debug)]
pub struct VerbindungDetails {
    pub verbindungen: Vec<Verbindung>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Verbindung {
    pub verbindungs_abschnitte: Vec<Abschnitt>,
}

#[derive(Deserialize, Debug)]
pub struct Abschnitt {
    pub halte: Vec<Halt>,
}

/// A stop. `id` is a composite location-id string, not a bare numeric id.
#[derive(Deserialize, Debug)]
pub struct Halt {
    pub id: String,
    #[allow(dead_code)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_payload_requires_the_recon_field() {
        let missing: Result<VerbindungResponse, _> =
            serde_json::from_str(r#"{"hinfahrtDatum": "2024-05-01"}"#);
        assert!(missing.is_err());

        let ok: VerbindungResponse = serde_json::from_str(
            r#"{"hinfahrtRecon": "¶HKI¶T$A=1@L=8011160@$", "hinfahrtDatum": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(ok.hinfahrt_datum.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn detail_payload_deserializes_nested_legs() {
        let details: VerbindungDetails = serde_json::from_str(
            r#"{
                "verbindungen": [{
                    "verbindungsAbschnitte": [{
                        "halte": [
                            {"id": "A=1@O=Berlin Hbf@L=8011160@", "name": "Berlin Hbf"},
                            {"id": "A=1@O=Hamburg Hbf@L=8002549@", "name": "Hamburg Hbf"}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(details.verbindungen.len(), 1);
        assert_eq!(details.verbindungen[0].verbindungs_abschnitte[0].halte.len(), 2);
    }
}
