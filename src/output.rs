use crate::models::{DailyOutlook, SprayRecommendation};
use std::fmt::Write;

/// Terminal report for a single recommendation
pub fn render_recommendation(rec: &SprayRecommendation, location: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} / {}  [{}]",
        rec.status.symbol(),
        rec.status.label_local(),
        rec.status.label_english(),
        location
    );
    let _ = writeln!(out, "  {} {}", rec.icon.symbol(), rec.factor.label_local());
    let _ = writeln!(out, "  {}", rec.reason_local);
    let _ = writeln!(out, "  {}", rec.reason_english);
    let _ = writeln!(out, "  ช่วงเวลาที่เหมาะสม: {}", rec.best_window_local);
    let _ = writeln!(out, "  Updated: {}", rec.generated_at.format("%Y-%m-%d %H:%M"));

    out
}

/// Terminal table for the weekly outlook
pub fn render_outlook(days: &[DailyOutlook]) -> String {
    let mut out = String::new();

    if days.is_empty() {
        out.push_str("No forecast days available\n");
        return out;
    }

    for day in days {
        let _ = writeln!(
            out,
            "{} {}  {:>2.0}-{:<2.0}°C  {:>3.0}%  {:>4.1} km/h  rain {:>3.0}%  {}",
            day.status.symbol(),
            day.date.format("%a %d %b"),
            day.temp_min_c,
            day.temp_max_c,
            day.avg_humidity,
            day.avg_wind_kmh,
            day.rain_probability,
            day.reason_english
        );
    }

    out
}
