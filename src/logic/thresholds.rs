/// Spray decision thresholds for the short-horizon (next 12 slots) check.
///
/// Rain probabilities and humidity are percentages, rain amounts mm per slot,
/// wind km/h, temperatures °C. Hours are local clock hours, start inclusive
/// and end exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprayThresholds {
    pub rain_prob_bad: f64,
    pub rain_prob_warn: f64,
    pub rain_mm_bad: f64,
    pub rain_mm_warn: f64,

    pub wind_bad: f64,
    pub wind_warn: f64,
    pub wind_ideal: f64,

    pub humidity_bad: f64,
    pub humidity_warn: f64,
    pub humidity_ideal: f64,

    pub temp_bad: f64,
    pub temp_warn: f64,
    pub temp_ideal: f64,

    pub morning_start: u32,
    pub morning_end: u32,
    pub evening_start: u32,
    pub evening_end: u32,

    /// Number of leading readings examined
    pub horizon: usize,
    /// Largest gap (hours) between readings that still counts as contiguous
    pub block_gap_hours: f64,
    /// Shortest span (hours) for a block to be preferred over a single slot
    pub min_block_hours: f64,
    /// Blocks at least this long are shown without an hour count
    pub long_block_hours: f64,
}

pub const THRESHOLDS: SprayThresholds = SprayThresholds {
    rain_prob_bad: 50.0,
    rain_prob_warn: 25.0,
    rain_mm_bad: 0.5,
    rain_mm_warn: 0.2,

    wind_bad: 12.0,
    wind_warn: 8.0,
    wind_ideal: 5.0,

    humidity_bad: 90.0,
    humidity_warn: 80.0,
    humidity_ideal: 70.0,

    temp_bad: 36.0,
    temp_warn: 32.0,
    temp_ideal: 28.0,

    morning_start: 6,
    morning_end: 10,
    evening_start: 16,
    evening_end: 18,

    horizon: 12,
    block_gap_hours: 1.1,
    min_block_hours: 2.0,
    long_block_hours: 3.0,
};

/// Thresholds for the per-day outlook. All comparisons are strict (`>`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyThresholds {
    pub wind_bad: f64,
    pub wind_warn: f64,
    pub humidity_bad: f64,
    pub humidity_warn: f64,
    pub humidity_watch: f64,
    pub rain_prob_bad: f64,
    pub rain_prob_warn: f64,
    pub temp_hot: f64,
    pub max_days: usize,
}

pub const DAILY_THRESHOLDS: DailyThresholds = DailyThresholds {
    wind_bad: 15.0,
    wind_warn: 10.0,
    humidity_bad: 90.0,
    humidity_warn: 85.0,
    humidity_watch: 80.0,
    rain_prob_bad: 60.0,
    rain_prob_warn: 30.0,
    temp_hot: 35.0,
    max_days: 7,
};
