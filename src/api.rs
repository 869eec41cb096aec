// Wire types shared by the http handlers and the lookup subcommand.
use serde::Serialize;
use std::fmt;

/// Normalized journey query, best effort: any field the decoders could not
/// recover is null on the wire.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDetails {
    pub from_station: Option<String>,
    pub from_station_id: Option<String>,
    pub to_station: Option<String>,
    pub to_station_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub class: Option<i64>,
}

impl JourneyDetails {
    /// One-line summary for logs and the `lookup` subcommand. Class renders
    /// "First" only for exactly 1, everything else is "Second".
    pub fn summary(&self) -> String {
        let class = if self.class == Some(1) { "First" } else { "Second" };
        format!(
            "From: {} ({}) | To: {} ({}) | Date: {} | Time: {} | Class: {}",
            self.from_station.as_deref().unwrap_or("Unknown"),
            self.from_station_id.as_deref().unwrap_or("N/A"),
            self.to_station.as_deref().unwrap_or("Unknown"),
            self.to_station_id.as_deref().unwrap_or("N/A"),
            self.date.as_deref().unwrap_or("N/A"),
            self.time.as_deref().unwrap_or("N/A"),
            class,
        )
    }
}

/// Failure payload of the extraction pipeline. Callers discriminate on the
/// presence of the `error` key, so this never shares a body with a success.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.error, details),
            None => write!(f, "{}", self.error),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JourneyResponse {
    pub success: bool,
    pub journey_details: JourneyDetails,
}

#[derive(Serialize, Debug)]
pub struct Healthy {
    pub healthy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> JourneyDetails {
        JourneyDetails {
            from_station: Some("Berlin Hbf".to_string()),
            from_station_id: Some("8011160".to_string()),
            to_station: Some("Hamburg Hbf".to_string()),
            to_station_id: Some("8002549".to_string()),
            date: Some("2024-05-01".to_string()),
            time: Some("09:15".to_string()),
            class: Some(1),
        }
    }

    #[test]
    fn summary_renders_first_class() {
        assert_eq!(
            details().summary(),
            "From: Berlin Hbf (8011160) | To: Hamburg Hbf (8002549) | Date: 2024-05-01 | Time: 09:15 | Class: First"
        );
    }

    #[test]
    fn summary_renders_second_for_anything_but_one() {
        let mut d = details();
        d.class = Some(2);
        assert!(d.summary().ends_with("Class: Second"));
        d.class = Some(7);
        assert!(d.summary().ends_with("Class: Second"));
        d.class = None;
        assert!(d.summary().ends_with("Class: Second"));
    }

    #[test]
    fn summary_substitutes_placeholders_for_missing_fields() {
        let d = JourneyDetails {
            from_station_id: Some("8011160".to_string()),
            to_station_id: Some("8002549".to_string()),
            ..Default::default()
        };
        assert_eq!(
            d.summary(),
            "From: Unknown (8011160) | To: Unknown (8002549) | Date: N/A | Time: N/A | Class: Second"
        );
    }

    #[test]
    fn failure_serializes_without_null_details() {
        let failure = ExtractionFailure {
            error: "boom".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }

    #[test]
    fn details_serialize_camel_case() {
        let json = serde_json::to_value(details()).unwrap();
        assert_eq!(json["fromStationId"], "8011160");
        assert_eq!(json["toStation"], "Hamburg Hbf");
    }
}
