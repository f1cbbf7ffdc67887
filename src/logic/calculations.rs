use super::thresholds::{SprayThresholds, THRESHOLDS};
use crate::models::HourlyReading;

/// Median of a series; even-length series average the two middle values
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Largest value of a series
pub fn maximum(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Round half away from zero, for values embedded in advice text
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

/// Part of the day, used to favour the cooler and calmer spraying hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Midday,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32, t: &SprayThresholds) -> Self {
        if hour >= t.morning_start && hour < t.morning_end {
            TimeOfDay::Morning
        } else if hour >= t.evening_start && hour < t.evening_end {
            TimeOfDay::Evening
        } else if hour >= t.morning_end && hour < t.evening_start {
            TimeOfDay::Midday
        } else {
            TimeOfDay::Night
        }
    }

    pub fn is_preferred(&self) -> bool {
        matches!(self, TimeOfDay::Morning | TimeOfDay::Evening)
    }

    /// Score adjustment: mornings and evenings favoured, midday hot, night damp
    pub fn bonus(&self) -> f64 {
        match self {
            TimeOfDay::Morning => 20.0,
            TimeOfDay::Evening => 15.0,
            TimeOfDay::Midday => -10.0,
            TimeOfDay::Night => -20.0,
        }
    }
}

/// Desirability of spraying during one reading, floored at zero
pub fn hour_score(reading: &HourlyReading) -> f64 {
    let t = &THRESHOLDS;
    let mut score = 100.0;

    score += TimeOfDay::from_hour(reading.hour_of_day(), t).bonus();

    score -= reading.rain_probability * 0.5;
    score -= (reading.wind_speed_kmh - t.wind_ideal).max(0.0) * 2.0;
    score -= (reading.humidity_percent - t.humidity_ideal).max(0.0) * 0.3;
    score -= (reading.temperature_c - t.temp_ideal).max(0.0) * 1.5;

    score.max(0.0)
}

/// Peak and median figures over the examined readings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowStats {
    pub max_rain_prob: f64,
    pub max_rain_mm: f64,
    pub max_wind: f64,
    pub median_rain_prob: f64,
    pub median_wind: f64,
    pub median_humidity: f64,
    pub median_temp: f64,
}

impl WindowStats {
    /// Returns `None` when there is nothing to summarise
    pub fn from_readings(readings: &[HourlyReading]) -> Option<Self> {
        let probs: Vec<f64> = readings.iter().map(|r| r.rain_probability).collect();
        let rains: Vec<f64> = readings.iter().map(|r| r.rain_mm()).collect();
        let winds: Vec<f64> = readings.iter().map(|r| r.wind_speed_kmh).collect();
        let hums: Vec<f64> = readings.iter().map(|r| r.humidity_percent).collect();
        let temps: Vec<f64> = readings.iter().map(|r| r.temperature_c).collect();

        Some(Self {
            max_rain_prob: maximum(&probs)?,
            max_rain_mm: maximum(&rains)?,
            max_wind: maximum(&winds)?,
            median_rain_prob: median(&probs)?,
            median_wind: median(&winds)?,
            median_humidity: median(&hums)?,
            median_temp: median(&temps)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn reading(ts: &str, prob: f64, wind: f64, hum: f64, temp: f64) -> HourlyReading {
        HourlyReading::new(
            DateTime::parse_from_rfc3339(ts).unwrap(),
            prob,
            wind,
            hum,
            temp,
        )
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn median_does_not_reorder_input() {
        let values = [9.0, 1.0, 5.0, 3.0];
        assert_eq!(median(&values), Some(4.0));
        assert_eq!(values, [9.0, 1.0, 5.0, 3.0]);
    }

    #[test]
    fn maximum_of_series() {
        assert_eq!(maximum(&[0.1, 0.7, 0.3]), Some(0.7));
        assert_eq!(maximum(&[-2.0, -5.0]), Some(-2.0));
        assert_eq!(maximum(&[]), None);
    }

    #[test]
    fn round_display_half_away_from_zero() {
        assert_eq!(round_display(2.5), 3);
        assert_eq!(round_display(2.49), 2);
        assert_eq!(round_display(79.5), 80);
    }

    #[test]
    fn time_of_day_boundaries() {
        let t = &THRESHOLDS;
        assert_eq!(TimeOfDay::from_hour(5, t), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6, t), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(9, t), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(10, t), TimeOfDay::Midday);
        assert_eq!(TimeOfDay::from_hour(15, t), TimeOfDay::Midday);
        assert_eq!(TimeOfDay::from_hour(16, t), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(17, t), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(18, t), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0, t), TimeOfDay::Night);
        assert!(TimeOfDay::Evening.is_preferred());
        assert!(!TimeOfDay::Night.is_preferred());
    }

    #[test]
    fn hour_score_ideal_by_time_of_day() {
        assert_eq!(hour_score(&reading("2025-06-01T07:00:00+07:00", 0.0, 3.0, 60.0, 26.0)), 120.0);
        assert_eq!(hour_score(&reading("2025-06-01T12:00:00+07:00", 0.0, 3.0, 60.0, 26.0)), 90.0);
        assert_eq!(hour_score(&reading("2025-06-01T17:00:00+07:00", 0.0, 3.0, 60.0, 26.0)), 115.0);
        assert_eq!(hour_score(&reading("2025-06-01T02:00:00+07:00", 0.0, 3.0, 60.0, 26.0)), 80.0);
    }

    #[test]
    fn hour_score_penalties() {
        // 120 - 5 (rain) - 4 (wind) - 1.5 (humidity) - 3 (temperature)
        let score = hour_score(&reading("2025-06-01T07:00:00+07:00", 10.0, 7.0, 75.0, 30.0));
        assert!((score - 106.5).abs() < 1e-9);
    }

    #[test]
    fn hour_score_floors_at_zero() {
        let score = hour_score(&reading("2025-06-01T02:00:00+07:00", 100.0, 40.0, 100.0, 40.0));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn window_stats_peaks_and_medians() {
        let readings = vec![
            reading("2025-06-01T06:00:00+07:00", 10.0, 4.0, 60.0, 26.0).with_rain_mm(0.3),
            reading("2025-06-01T07:00:00+07:00", 30.0, 6.0, 70.0, 27.0),
            reading("2025-06-01T08:00:00+07:00", 20.0, 10.0, 80.0, 29.0),
            reading("2025-06-01T09:00:00+07:00", 0.0, 2.0, 90.0, 31.0),
        ];
        let stats = WindowStats::from_readings(&readings).unwrap();
        assert_eq!(stats.max_rain_prob, 30.0);
        assert_eq!(stats.max_rain_mm, 0.3);
        assert_eq!(stats.max_wind, 10.0);
        assert_eq!(stats.median_rain_prob, 15.0);
        assert_eq!(stats.median_wind, 5.0);
        assert_eq!(stats.median_humidity, 75.0);
        assert_eq!(stats.median_temp, 28.0);
    }

    #[test]
    fn window_stats_empty() {
        assert_eq!(WindowStats::from_readings(&[]), None);
    }
}
