// Splits the deep-link date/time tokens. The values are passed through as
// they appear in the source, never reparsed into calendar types: the rest of
// the pipeline treats them as opaque display tokens.

#[derive(Debug, Default, PartialEq)]
pub struct DecodedDateTime {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Split a date or combined date-time token. A `T` separates date from time;
/// the time keeps only hours and minutes, with any trailing utc offset
/// stripped. Never errors: missing substructure leaves fields unset.
pub fn decode_date_time(token: Option<&str>) -> DecodedDateTime {
    let Some(token) = token else {
        return DecodedDateTime::default();
    };
    if token.is_empty() {
        return DecodedDateTime::default();
    }
    let Some((date, time)) = token.split_once('T') else {
        return DecodedDateTime {
            date: Some(token.to_string()),
            time: None,
        };
    };

    // The offset marker is the first '+' or '-' after the separator.
    let time = time.split(['+', '-']).next().unwrap_or("");
    let mut parts = time.split(':');
    let hours = parts.next().unwrap_or("");
    let time = if hours.is_empty() {
        None
    } else if let Some(minutes) = parts.next() {
        Some(format!("{hours}:{minutes}"))
    } else {
        Some(hours.to_string())
    };

    DecodedDateTime {
        date: if date.is_empty() { None } else { Some(date.to_string()) },
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_token_splits_and_strips_offset() {
        let decoded = decode_date_time(Some("2024-05-01T09:15:00+02:00"));
        assert_eq!(decoded.date, Some("2024-05-01".to_string()));
        assert_eq!(decoded.time, Some("09:15".to_string()));
    }

    #[test]
    fn negative_offsets_are_stripped_too() {
        let decoded = decode_date_time(Some("2024-05-01T23:45:00-05:00"));
        assert_eq!(decoded.time, Some("23:45".to_string()));
    }

    #[test]
    fn date_only_token_yields_no_time() {
        let decoded = decode_date_time(Some("2024-05-01"));
        assert_eq!(decoded.date, Some("2024-05-01".to_string()));
        assert_eq!(decoded.time, None);
    }

    #[test]
    fn seconds_are_dropped_without_repadding() {
        let decoded = decode_date_time(Some("2024-05-01T9:5:59"));
        assert_eq!(decoded.time, Some("9:5".to_string()));
    }

    #[test]
    fn hours_only_time_survives() {
        let decoded = decode_date_time(Some("2024-05-01T09"));
        assert_eq!(decoded.time, Some("09".to_string()));
    }

    #[test]
    fn trailing_separator_leaves_time_unset() {
        let decoded = decode_date_time(Some("2024-05-01T"));
        assert_eq!(decoded.date, Some("2024-05-01".to_string()));
        assert_eq!(decoded.time, None);
    }

    #[test]
    fn null_and_empty_tokens_yield_empty_results() {
        assert_eq!(decode_date_time(None), DecodedDateTime::default());
        assert_eq!(decode_date_time(Some("")), DecodedDateTime::default());
    }
}
