use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

/// One forecast slot (an hour, or a 3-hour bucket from coarser providers).
///
/// The timestamp keeps the offset it was produced in; hour-of-day checks and
/// clock formatting are done in that offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    pub timestamp: DateTime<FixedOffset>,
    pub rain_probability: f64, // 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain_amount_mm: Option<f64>,
    pub wind_speed_kmh: f64,
    pub humidity_percent: f64,
    pub temperature_c: f64,
}

impl HourlyReading {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        rain_probability: f64,
        wind_speed_kmh: f64,
        humidity_percent: f64,
        temperature_c: f64,
    ) -> Self {
        Self {
            timestamp,
            rain_probability,
            rain_amount_mm: None,
            wind_speed_kmh,
            humidity_percent,
            temperature_c,
        }
    }

    pub fn with_rain_mm(mut self, mm: f64) -> Self {
        self.rain_amount_mm = Some(mm);
        self
    }

    /// Rain amount with the absent case treated as dry
    pub fn rain_mm(&self) -> f64 {
        self.rain_amount_mm.unwrap_or(0.0)
    }

    /// Same instant, expressed in `offset`
    pub fn in_offset(mut self, offset: FixedOffset) -> Self {
        self.timestamp = self.timestamp.with_timezone(&offset);
        self
    }

    /// Local hour of day (0-23) in the reading's own offset
    pub fn hour_of_day(&self) -> u32 {
        self.timestamp.hour()
    }
}
