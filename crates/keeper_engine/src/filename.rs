use chrono::{DateTime, Utc};

/// Export filename carrying an ISO-8601-derived UTC timestamp.
///
/// Colons and dots never appear in the stamp (Windows rejects the former),
/// so `2026-08-06T09:30:12Z` becomes `2026-08-06T09-30-12`.
pub fn timestamped_filename(stem: &str, extension: &str, now: DateTime<Utc>) -> String {
    format!("{stem}-{}.{extension}", now.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::timestamped_filename;

    #[test]
    fn stamp_is_second_resolution_with_dashes() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 12).unwrap();
        assert_eq!(
            timestamped_filename("keeper-list", "json", now),
            "keeper-list-2026-08-06T09-30-12.json"
        );
    }

    #[test]
    fn extension_is_caller_chosen() {
        let now = chrono::Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let name = timestamped_filename("keeper-list", "txt", now);
        assert!(name.ends_with(".txt"));
        assert!(!name[..name.len() - 4].contains('.'));
        assert!(!name.contains(':'));
    }
}
