use chrono::{DateTime, Utc};

/// Compact age of a feed item relative to `now`.
pub fn relative_since(now: DateTime<Utc>, t: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(t);
    let seconds = delta.num_seconds();
    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else if seconds < 30 * 86_400 {
        format!("{}d ago", seconds / 86_400)
    } else {
        t.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn relative_display() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(relative_since(now, at(10)), "just now");
        assert_eq!(relative_since(now, at(90)), "1m ago");
        assert_eq!(relative_since(now, at(2 * 3600 + 5)), "2h ago");
        assert_eq!(relative_since(now, at(3 * 86_400)), "3d ago");
        assert_eq!(relative_since(now, at(90 * 86_400)), "Mar 17, 2025");
    }
}
