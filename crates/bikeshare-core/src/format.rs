//! Human-readable rendering of second counts.

/// Renders a non-negative second count as a unit breakdown, e.g.
/// `"1 day(s) 2 hour(s) 3 minute(s) 4 second(s)"`.
///
/// The value is rounded to the nearest whole second first; zero-valued units
/// are omitted, largest unit first. Exactly zero renders as `"0 second(s)"`
/// rather than an empty string.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let secs = total % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days} day(s)"));
    }
    if hours > 0 {
        parts.push(format!("{hours} hour(s)"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} minute(s)"));
    }
    if secs > 0 {
        parts.push(format!("{secs} second(s)"));
    }
    if parts.is_empty() {
        return "0 second(s)".to_string();
    }
    parts.join(" ")
}
