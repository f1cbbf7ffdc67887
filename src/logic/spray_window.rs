use super::best_window;
use super::calculations::WindowStats;
use super::reason::Explanation;
use super::thresholds::THRESHOLDS;
use crate::models::{HourlyReading, SprayRecommendation, SprayStatus};
use chrono::{DateTime, FixedOffset};

/// Spray window advice from a short forecast horizon.
///
/// Looks at the first 12 readings and produces:
/// - a status: any single severe slot (rain, rain amount, wind) or a
///   sustained median (humidity, heat) makes it `bad`; marginal medians or
///   a light rain amount make it `caution`
/// - a reason naming one cause, checked in the order rain, wind, humidity, heat
/// - the best contiguous spraying span, morning and evening first
///
/// Stateless; the same input always yields the same recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SprayWindowService;

impl SprayWindowService {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_recommendation(
        &self,
        hours: &[HourlyReading],
        now: DateTime<FixedOffset>,
    ) -> SprayRecommendation {
        let horizon = &hours[..hours.len().min(THRESHOLDS.horizon)];

        let Some(stats) = WindowStats::from_readings(horizon) else {
            return Self::without_forecast(now);
        };

        let status = classify(&stats);
        let explanation = Explanation::for_status(status, &stats, horizon);

        let blocks = best_window::merge_blocks(horizon);
        let best = best_window::select_block(&blocks);

        SprayRecommendation {
            status,
            icon: explanation.icon(),
            factor: explanation.factor,
            reason_local: explanation.local,
            reason_english: explanation.english,
            best_window_local: best_window::describe(best, status),
            best_window: best.cloned(),
            generated_at: now,
        }
    }

    fn without_forecast(now: DateTime<FixedOffset>) -> SprayRecommendation {
        let explanation = Explanation::no_data();
        SprayRecommendation {
            status: SprayStatus::Good,
            icon: explanation.icon(),
            factor: explanation.factor,
            reason_local: explanation.local,
            reason_english: explanation.english,
            best_window_local: best_window::describe(None, SprayStatus::Good),
            best_window: None,
            generated_at: now,
        }
    }
}

/// First matching rule wins: severe peaks, severe medians, marginal conditions
pub fn classify(stats: &WindowStats) -> SprayStatus {
    let t = &THRESHOLDS;

    if stats.max_rain_prob >= t.rain_prob_bad
        || stats.max_rain_mm >= t.rain_mm_bad
        || stats.max_wind >= t.wind_bad
    {
        SprayStatus::Bad
    } else if stats.median_humidity >= t.humidity_bad || stats.median_temp >= t.temp_bad {
        SprayStatus::Bad
    } else if stats.median_rain_prob >= t.rain_prob_warn
        || stats.median_wind >= t.wind_warn
        || stats.median_humidity >= t.humidity_warn
        || stats.median_temp >= t.temp_warn
        || stats.max_rain_mm >= t.rain_mm_warn
    {
        SprayStatus::Caution
    } else {
        SprayStatus::Good
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::best_window::{DEFAULT_WINDOW_LOCAL, NO_WINDOW_LOCAL};
    use crate::models::{Factor, SprayIcon};
    use chrono::Duration;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn ideal(ts: DateTime<FixedOffset>) -> HourlyReading {
        HourlyReading::new(ts, 5.0, 3.0, 60.0, 26.0).with_rain_mm(0.0)
    }

    /// Twelve hourly readings from `start`, each built by `make`
    fn day(start: &str, make: impl Fn(usize, HourlyReading) -> HourlyReading) -> Vec<HourlyReading> {
        let start = at(start);
        (0..12)
            .map(|i| make(i, ideal(start + Duration::hours(i as i64))))
            .collect()
    }

    fn now() -> DateTime<FixedOffset> {
        at("2025-06-01T05:45:00+07:00")
    }

    fn advise(hours: &[HourlyReading]) -> SprayRecommendation {
        SprayWindowService::new().compute_recommendation(hours, now())
    }

    #[test]
    fn ideal_morning_is_good_with_long_block() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |_, h| h));

        assert_eq!(rec.status, SprayStatus::Good);
        assert_eq!(rec.factor, Factor::Ideal);
        assert_eq!(rec.icon, SprayIcon::Sun);
        assert!(rec.reason_english.starts_with("Excellent"));
        assert_eq!(rec.best_window_local, "06:00–17:00 น.");

        let span = rec.best_window.unwrap();
        assert_eq!(span.span_hours(), 11.0);
    }

    #[test]
    fn single_rain_spike_vetoes_spraying() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, mut h| {
            if i == 2 {
                h.rain_probability = 80.0;
            }
            h
        }));

        assert_eq!(rec.status, SprayStatus::Bad);
        assert_eq!(rec.factor, Factor::Rain);
        assert_eq!(rec.icon, SprayIcon::RainCloud);
        assert!(rec.reason_english.contains("80%"));
        assert!(rec.reason_local.contains("80%"));
        assert!(rec.reason_english.contains("next 3h"));
        // 06:00-07:00 is too short, the block after the shower wins
        assert_eq!(rec.best_window_local, "09:00–17:00 น.");
    }

    #[test]
    fn rain_probability_threshold_is_inclusive() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, mut h| {
            if i == 5 {
                h.rain_probability = 50.0;
            }
            h
        }));
        assert_eq!(rec.status, SprayStatus::Bad);

        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, mut h| {
            if i == 5 {
                h.rain_probability = 49.9;
            }
            h
        }));
        assert_eq!(rec.status, SprayStatus::Good);
    }

    #[test]
    fn steady_moderate_wind_is_caution() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |_, mut h| {
            h.wind_speed_kmh = 9.0;
            h
        }));

        assert_eq!(rec.status, SprayStatus::Caution);
        assert_eq!(rec.factor, Factor::Wind);
        assert_eq!(rec.icon, SprayIcon::Wind);
        assert!(rec.reason_english.contains("9 km/h"));
        assert_eq!(rec.best_window_local, NO_WINDOW_LOCAL);
        assert_eq!(rec.best_window, None);
    }

    #[test]
    fn wind_exactly_at_warning_level_is_caution() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |_, mut h| {
            h.wind_speed_kmh = 8.0;
            h
        }));

        assert_eq!(rec.status, SprayStatus::Caution);
        assert_eq!(rec.factor, Factor::Wind);
        // 8 km/h still passes the per-hour filter
        assert_eq!(rec.best_window_local, "06:00–17:00 น.");
    }

    #[test]
    fn rain_beats_wind_when_both_breach() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, mut h| {
            if i == 4 {
                h.rain_probability = 60.0;
                h.wind_speed_kmh = 20.0;
            }
            h
        }));
        assert_eq!(rec.status, SprayStatus::Bad);
        assert_eq!(rec.factor, Factor::Rain);
        assert_eq!(rec.icon, SprayIcon::RainCloud);
    }

    #[test]
    fn sustained_humidity_or_heat_is_bad() {
        let humid = advise(&day("2025-06-01T06:00:00+07:00", |_, mut h| {
            h.humidity_percent = 92.0;
            h
        }));
        assert_eq!(humid.status, SprayStatus::Bad);
        assert_eq!(humid.factor, Factor::Humidity);

        let hot = advise(&day("2025-06-01T10:00:00+07:00", |_, mut h| {
            h.temperature_c = 37.0;
            h
        }));
        assert_eq!(hot.status, SprayStatus::Bad);
        assert_eq!(hot.factor, Factor::Heat);
        assert!(hot.reason_english.contains("37°C"));
    }

    #[test]
    fn light_rain_amount_is_caution() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, h| {
            if i == 7 {
                h.with_rain_mm(0.3)
            } else {
                h
            }
        }));
        assert_eq!(rec.status, SprayStatus::Caution);
        assert_eq!(rec.factor, Factor::Rain);
    }

    #[test]
    fn empty_forecast_falls_back_to_morning() {
        let rec = advise(&[]);
        assert_eq!(rec.status, SprayStatus::Good);
        assert_eq!(rec.best_window_local, DEFAULT_WINDOW_LOCAL);
        assert_eq!(rec.best_window, None);
        assert_eq!(rec.icon, SprayIcon::Sun);
        assert_eq!(rec.generated_at, now());
    }

    #[test]
    fn good_without_qualifying_hour_suggests_default() {
        // Even slots too rainy, odd slots too hot; medians stay under warning levels
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |i, mut h| {
            if i % 2 == 0 {
                h.rain_probability = 30.0;
            } else {
                h.temperature_c = 33.0;
            }
            h
        }));
        assert_eq!(rec.status, SprayStatus::Good);
        assert_eq!(rec.best_window_local, DEFAULT_WINDOW_LOCAL);
    }

    #[test]
    fn only_first_twelve_readings_count() {
        let mut hours = day("2025-06-01T06:00:00+07:00", |_, h| h);
        let late = at("2025-06-01T18:00:00+07:00");
        hours.push(HourlyReading::new(late, 100.0, 40.0, 99.0, 40.0).with_rain_mm(5.0));

        let rec = advise(&hours);
        assert_eq!(rec.status, SprayStatus::Good);
    }

    #[test]
    fn short_horizon_is_accepted() {
        let start = at("2025-06-01T16:00:00+07:00");
        let hours = vec![ideal(start), ideal(start + Duration::hours(1)), ideal(start + Duration::hours(2))];

        let rec = advise(&hours);
        assert_eq!(rec.status, SprayStatus::Good);
        assert_eq!(rec.best_window_local, "16:00–18:00 น. (2 ชม.)");
    }

    #[test]
    fn generated_at_preserved_verbatim() {
        let now = at("2025-06-01T05:45:12+07:00");
        let rec = SprayWindowService::new().compute_recommendation(&day("2025-06-01T06:00:00+07:00", |_, h| h), now);
        assert_eq!(rec.generated_at, now);
        assert_eq!(rec.generated_at.offset(), now.offset());
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let hours = day("2025-06-01T06:00:00+07:00", |i, mut h| {
            h.wind_speed_kmh = 4.0 + i as f64;
            h.humidity_percent = 65.0 + i as f64;
            h
        });
        assert_eq!(advise(&hours), advise(&hours));
    }

    #[test]
    fn worsening_a_factor_never_lowers_severity() {
        let base = day("2025-06-01T06:00:00+07:00", |_, h| h);

        type Worsen = fn(&mut HourlyReading, f64);
        let factors: [(Worsen, f64); 5] = [
            (|h, v| h.rain_probability = v, 5.0),
            (|h, v| h.rain_amount_mm = Some(v / 20.0), 0.0),
            (|h, v| h.wind_speed_kmh = v / 4.0, 12.0),
            (|h, v| h.humidity_percent = 60.0 + v / 2.0, 0.0),
            (|h, v| h.temperature_c = 26.0 + v / 5.0, 0.0),
        ];

        for (worsen, start) in factors {
            let mut previous = SprayStatus::Good;
            for step in 0..=20 {
                let value = start + step as f64 * 5.0;
                let hours: Vec<_> = base
                    .iter()
                    .cloned()
                    .map(|mut h| {
                        worsen(&mut h, value);
                        h
                    })
                    .collect();
                let status = advise(&hours).status;
                assert!(status >= previous, "severity dropped at value {}", value);
                previous = status;
            }
        }
    }

    #[test]
    fn reasons_share_the_factor_value() {
        let rec = advise(&day("2025-06-01T06:00:00+07:00", |_, mut h| {
            h.humidity_percent = 84.0;
            h
        }));
        assert_eq!(rec.factor, Factor::Humidity);
        assert!(rec.reason_english.contains("84%"));
        assert!(rec.reason_local.contains("84%"));
    }

    #[test]
    fn classify_boundaries() {
        let calm = WindowStats {
            max_rain_prob: 10.0,
            max_rain_mm: 0.0,
            max_wind: 6.0,
            median_rain_prob: 5.0,
            median_wind: 3.0,
            median_humidity: 60.0,
            median_temp: 26.0,
        };
        assert_eq!(classify(&calm), SprayStatus::Good);
        assert_eq!(classify(&WindowStats { max_wind: 12.0, ..calm.clone() }), SprayStatus::Bad);
        assert_eq!(classify(&WindowStats { max_rain_mm: 0.5, ..calm.clone() }), SprayStatus::Bad);
        assert_eq!(classify(&WindowStats { max_rain_mm: 0.2, ..calm.clone() }), SprayStatus::Caution);
        assert_eq!(classify(&WindowStats { median_humidity: 90.0, ..calm.clone() }), SprayStatus::Bad);
        assert_eq!(classify(&WindowStats { median_humidity: 80.0, ..calm.clone() }), SprayStatus::Caution);
        assert_eq!(classify(&WindowStats { median_temp: 36.0, ..calm.clone() }), SprayStatus::Bad);
        assert_eq!(classify(&WindowStats { median_temp: 32.0, ..calm.clone() }), SprayStatus::Caution);
        assert_eq!(classify(&WindowStats { median_rain_prob: 25.0, ..calm }), SprayStatus::Caution);
    }
}
