// Decoders for the opaque station tokens found in deep-link fragments and in
// vendor itinerary stops. A token is either a bare numeric id ("8000001") or a
// composite location-id string like "Berlin Hbf@X=13369549@L=8011160@B=1".
// Neither decoder is allowed to fail the pipeline: anything undecodable
// degrades to None.
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::LazyLock;

static LOCATION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@L=(\d+)").unwrap());
static ORIGIN_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@O=([^@]*)").unwrap());

/// Numeric station identifier of a token, if one can be recovered.
pub fn decode_station_id(token: Option<&str>) -> Option<String> {
    let token = token?;
    if let Some(marker) = LOCATION_ID.captures(token) {
        return Some(marker[1].to_string());
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return Some(token.to_string());
    }
    None
}

/// Human-readable station name of a token, if one can be recovered. A bare
/// numeric id carries no name.
pub fn decode_station_name(token: Option<&str>) -> Option<String> {
    let token = token?;
    if let Some(marker) = ORIGIN_NAME.captures(token) {
        return clean(&marker[1]);
    }
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let raw = token.split("@L=").next().unwrap_or(token);
    clean(raw)
}

// `+` means space in these tokens; percent-escapes may still be present when
// the fragment was encoded twice. Invalid escapes degrade to None.
fn clean(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8().ok()?;
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_marker_wins_over_numeric_fallback() {
        let token = Some("A=1@O=Berlin+Hbf@X=13369549@L=8011160@B=1");
        assert_eq!(decode_station_id(token), Some("8011160".to_string()));
        assert_eq!(decode_station_name(token), Some("Berlin Hbf".to_string()));
    }

    #[test]
    fn markers_decode_in_either_order() {
        let token = Some("A=1@L=8011160@O=Berlin+Hbf@B=1");
        assert_eq!(decode_station_id(token), Some("8011160".to_string()));
        assert_eq!(decode_station_name(token), Some("Berlin Hbf".to_string()));
    }

    #[test]
    fn bare_numeric_token_is_its_own_id_and_has_no_name() {
        assert_eq!(decode_station_id(Some("8000001")), Some("8000001".to_string()));
        assert_eq!(decode_station_name(Some("8000001")), None);
    }

    #[test]
    fn name_only_token_has_no_id() {
        assert_eq!(decode_station_id(Some("K%C3%B6ln+Hbf")), None);
        assert_eq!(decode_station_name(Some("K%C3%B6ln+Hbf")), Some("Köln Hbf".to_string()));
    }

    #[test]
    fn name_is_the_prefix_before_a_location_marker() {
        let token = Some("Hamburg+Hbf@L=8002549@B=1");
        assert_eq!(decode_station_id(token), Some("8002549".to_string()));
        assert_eq!(decode_station_name(token), Some("Hamburg Hbf".to_string()));
    }

    #[test]
    fn origin_marker_value_ends_at_next_at_sign() {
        let token = Some("@O=M%C3%BCnchen+Hbf@L=8000261@");
        assert_eq!(decode_station_name(token), Some("München Hbf".to_string()));
    }

    #[test]
    fn null_and_empty_tokens_decode_to_nothing() {
        assert_eq!(decode_station_id(None), None);
        assert_eq!(decode_station_name(None), None);
        assert_eq!(decode_station_id(Some("")), None);
        assert_eq!(decode_station_name(Some("")), None);
    }

    #[test]
    fn invalid_percent_escapes_degrade_to_none() {
        // 0xFF is not valid utf-8
        assert_eq!(decode_station_name(Some("%FF%FE")), None);
    }

    #[test]
    fn whitespace_only_names_are_dropped() {
        assert_eq!(decode_station_name(Some("+++@L=8011160")), None);
        assert_eq!(decode_station_id(Some("+++@L=8011160")), Some("8011160".to_string()));
    }
}
