//! ISO-8601 duration subset used by MPD attributes
//!
//! Only `PT[nH][nM][nS]` with integer components is understood. Fractional
//! seconds and day/month/year designators are not captured.

use chrono::TimeDelta;

/// Display value for a missing or zero-length duration
pub const NOT_SPECIFIED: &str = "Not specified";

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

/// Parse an MPD duration attribute such as `PT1H30M45S`
///
/// Returns `None` for absent, empty or non-matching input. The pattern is
/// anchored at the start only, so trailing text after the last recognised
/// component is ignored and a bare `PT` is a zero duration.
pub fn parse_duration(text: Option<&str>) -> Option<TimeDelta> {
    let text = text.filter(|t| !t.is_empty())?;
    let caps = regex!(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").captures(text)?;

    let component = |i: usize| -> Option<i64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse::<i64>().ok(),
            None => Some(0),
        }
    };

    let hours = TimeDelta::try_hours(component(1)?)?;
    let minutes = TimeDelta::try_minutes(component(2)?)?;
    let seconds = TimeDelta::try_seconds(component(3)?)?;

    hours.checked_add(&minutes)?.checked_add(&seconds)
}

/// Render a duration as `1h 05m 09s`, or `5m 09s` when under an hour
///
/// `None` and zero both render as "Not specified".
pub fn format_duration(duration: Option<TimeDelta>) -> String {
    let total = match duration {
        Some(d) if !d.is_zero() => d.num_seconds(),
        _ => return NOT_SPECIFIED.to_string(),
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else {
        format!("{}m {:02}s", minutes, seconds)
    }
}
