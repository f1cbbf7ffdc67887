use super::SprayStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated spray outlook for one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub avg_humidity: f64,
    pub avg_wind_kmh: f64,
    pub rain_probability: f64, // highest slot of the day
    pub status: SprayStatus,
    pub reason_local: String,
    pub reason_english: String,
}

impl DailyOutlook {
    /// Representative temperature used for the heat check
    pub fn mid_temp_c(&self) -> f64 {
        (self.temp_min_c + self.temp_max_c) / 2.0
    }
}
