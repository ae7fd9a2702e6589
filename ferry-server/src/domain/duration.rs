//! Travel time parsing and formatting.
//!
//! The segment table stores durations the way operators publish them
//! ("45 min", "1 hour 30 min", "2h"). The planner needs minutes, so
//! durations are parsed once when a segment is loaded.

/// Error returned when a duration string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration: {reason}")]
pub struct InvalidDuration {
    reason: &'static str,
}

impl InvalidDuration {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a human-readable duration into whole minutes.
///
/// The input is a sequence of `<number><unit>` groups. Whitespace between
/// groups and between a number and its unit is optional. Units are
/// case-insensitive; a number without a unit counts as minutes.
///
/// # Examples
///
/// ```
/// use ferry_server::domain::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("45 min").unwrap(), 45);
/// assert_eq!(parse_duration_minutes("1 hour 30 min").unwrap(), 90);
/// assert_eq!(parse_duration_minutes("1h30m").unwrap(), 90);
/// assert_eq!(parse_duration_minutes("90").unwrap(), 90);
/// assert!(parse_duration_minutes("soon").is_err());
/// ```
pub fn parse_duration_minutes(s: &str) -> Result<u32, InvalidDuration> {
    let mut rest = s.trim();
    if rest.is_empty() {
        return Err(InvalidDuration::new("empty duration"));
    }

    let mut total: u32 = 0;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_len == 0 {
            return Err(if rest.starts_with(|c: char| c.is_alphabetic()) {
                InvalidDuration::new("unit without a number")
            } else {
                InvalidDuration::new("unexpected character")
            });
        }

        let value: u32 = rest[..digits_len]
            .parse()
            .map_err(|_| InvalidDuration::new("number too large"))?;
        rest = rest[digits_len..].trim_start();

        let unit_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let factor = unit_factor(&rest[..unit_len])?;
        rest = &rest[unit_len..];

        total = value
            .checked_mul(factor)
            .and_then(|mins| total.checked_add(mins))
            .ok_or_else(|| InvalidDuration::new("number too large"))?;
    }

    Ok(total)
}

/// Minutes per unit.
fn unit_factor(unit: &str) -> Result<u32, InvalidDuration> {
    match unit.to_ascii_lowercase().as_str() {
        "" | "m" | "min" | "mins" | "minute" | "minutes" => Ok(1),
        "h" | "hr" | "hrs" | "hour" | "hours" => Ok(60),
        _ => Err(InvalidDuration::new("unknown unit")),
    }
}

/// Format minutes for display, e.g. `45m`, `2h`, `2h 50m`.
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
