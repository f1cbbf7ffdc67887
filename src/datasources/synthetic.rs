use crate::models::HourlyReading;
use chrono::{DateTime, Duration, FixedOffset, Timelike};
use std::f64::consts::PI;

/// A plausible tropical day for demos and offline runs.
///
/// Temperature and wind peak early afternoon, humidity bottoms out at the same
/// time, and rain chances rise with humidity. Deterministic for a given start.
pub fn diurnal_forecast(
    start: DateTime<FixedOffset>,
    count: usize,
    step_hours: i64,
) -> Vec<HourlyReading> {
    (0..count)
        .map(|i| {
            let timestamp = start + Duration::hours(i as i64 * step_hours);
            let hour = timestamp.hour() as f64 + timestamp.minute() as f64 / 60.0;
            let phase = ((hour - 8.0) * PI / 12.0).sin();

            let temperature_c = round1(29.0 + phase * 5.0);
            let wind_speed_kmh = round1(6.0 + phase * 4.0);
            let humidity_percent = round1(75.0 - phase * 15.0);
            let rain_probability = ((humidity_percent - 70.0) * 2.0).clamp(0.0, 100.0);
            let rain_mm = if rain_probability > 30.0 {
                round1((rain_probability - 30.0) / 20.0)
            } else {
                0.0
            };

            HourlyReading::new(
                timestamp,
                rain_probability,
                wind_speed_kmh,
                humidity_percent,
                temperature_c,
            )
            .with_rain_mm(rain_mm)
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
