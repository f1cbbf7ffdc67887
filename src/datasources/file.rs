use crate::error::Result;
use crate::models::HourlyReading;
use chrono::FixedOffset;

/// Parse a JSON array of readings, moved to the location's clock and
/// sorted by time.
pub fn parse_readings(content: &str, offset: FixedOffset) -> Result<Vec<HourlyReading>> {
    let readings: Vec<HourlyReading> = serde_json::from_str(content)?;

    let mut readings: Vec<HourlyReading> = readings
        .into_iter()
        .map(|r| r.in_offset(offset))
        .collect();
    readings.sort_by_key(|r| r.timestamp);

    tracing::debug!(points = readings.len(), "Loaded readings from file");
    Ok(readings)
}
