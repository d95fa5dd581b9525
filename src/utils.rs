use chrono::{DateTime, Utc};

/// Parse a minutes input field, falling back on empty or malformed text.
pub fn parse_minutes_input(value: &str, fallback: u32) -> u32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<u32>().unwrap_or(fallback)
}

/// Render a creation timestamp for list rows.
pub fn format_created_at(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Render elapsed session seconds as `hh:mm:ss` (or `mm:ss` under an hour).
pub fn format_session_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_input() {
        assert_eq!(parse_minutes_input("25", 0), 25);
        assert_eq!(parse_minutes_input("  30  ", 0), 30);
        assert_eq!(parse_minutes_input("", 20), 20);
        assert_eq!(parse_minutes_input("abc", 20), 20);
        assert_eq!(parse_minutes_input("-5", 20), 20);
    }

    #[test]
    fn test_format_session_clock() {
        assert_eq!(format_session_clock(0), "00:00");
        assert_eq!(format_session_clock(754), "12:34");
        assert_eq!(format_session_clock(3600), "01:00:00");
        assert_eq!(format_session_clock(3725), "01:02:05");
    }
}
