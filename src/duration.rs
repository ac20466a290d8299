use crate::types::error::HealthError;
use chrono::Duration;

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_DAY: i64 = 86_400;

/// Parse compact duration tokens like "24h", "60m" or "2d".
///
/// An empty token falls back to the 24 hour default. Anything not matching
/// `^\d+[hmd]$` is rejected, including values whose seconds would overflow.
pub fn parse_max_age(token: &str) -> Result<Duration, HealthError> {
    if token.is_empty() {
        return Ok(Duration::hours(24));
    }

    let invalid = || HealthError::InvalidFormat(token.to_string());

    if !token.is_ascii() {
        return Err(invalid());
    }

    let (digits, unit) = token.split_at(token.len() - 1);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let value: i64 = digits.parse().map_err(|_| invalid())?;
    let secs_per_unit = match unit {
        "h" => SECS_PER_HOUR,
        "m" => SECS_PER_MINUTE,
        "d" => SECS_PER_DAY,
        _ => return Err(invalid()),
    };

    let seconds = value.checked_mul(secs_per_unit).ok_or_else(invalid)?;
    Duration::try_seconds(seconds).ok_or_else(invalid)
}
