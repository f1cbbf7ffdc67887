use super::calculations::{maximum, round_display};
use super::thresholds::DAILY_THRESHOLDS;
use crate::models::{DailyOutlook, HourlyReading, SprayStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-day spray badges for the coming week.
///
/// Readings are grouped by their local calendar date. Each day is judged on
/// its mean wind and humidity, its wettest slot and the midpoint of its
/// temperature range.
pub fn daily_outlook(hours: &[HourlyReading]) -> Vec<DailyOutlook> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&HourlyReading>> = BTreeMap::new();
    for reading in hours {
        by_date
            .entry(reading.timestamp.date_naive())
            .or_default()
            .push(reading);
    }

    by_date
        .into_iter()
        .take(DAILY_THRESHOLDS.max_days)
        .map(|(date, readings)| summarize_day(date, &readings))
        .collect()
}

fn summarize_day(date: NaiveDate, readings: &[&HourlyReading]) -> DailyOutlook {
    let temps: Vec<f64> = readings.iter().map(|r| r.temperature_c).collect();
    let count = readings.len().max(1) as f64;

    let temp_max_c = maximum(&temps).unwrap_or(0.0);
    let temp_min_c = temps.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let avg_humidity = readings.iter().map(|r| r.humidity_percent).sum::<f64>() / count;
    let avg_wind_kmh = readings.iter().map(|r| r.wind_speed_kmh).sum::<f64>() / count;
    let rain_probability = readings
        .iter()
        .map(|r| r.rain_probability)
        .reduce(f64::max)
        .unwrap_or(0.0);

    let mut outlook = DailyOutlook {
        date,
        temp_min_c,
        temp_max_c,
        avg_humidity,
        avg_wind_kmh,
        rain_probability,
        status: SprayStatus::Good,
        reason_local: String::new(),
        reason_english: String::new(),
    };

    let (status, local, english) = judge_day(&outlook);
    outlook.status = status;
    outlook.reason_local = local;
    outlook.reason_english = english;
    outlook
}

/// Day-level verdict. Within each severity tier causes are checked wind,
/// humidity, rain, heat
fn judge_day(day: &DailyOutlook) -> (SprayStatus, String, String) {
    let d = &DAILY_THRESHOLDS;
    let wind = round_display(day.avg_wind_kmh);
    let humidity = round_display(day.avg_humidity);
    let rain = round_display(day.rain_probability);
    let temp = round_display(day.mid_temp_c());

    if day.avg_wind_kmh > d.wind_bad {
        (
            SprayStatus::Bad,
            format!("ลมแรงมาก {} กม./ชม. - ไม่ควรพ่นยา-ปุ๋ย", wind),
            format!("Very strong wind {} km/h - do not spray", wind),
        )
    } else if day.avg_humidity > d.humidity_bad {
        (
            SprayStatus::Bad,
            format!("ความชื้นสูงมาก {}% - หลีกเลี่ยงการพ่นยา-ปุ๋ย", humidity),
            format!("Very high humidity {}% - avoid spraying", humidity),
        )
    } else if day.rain_probability > d.rain_prob_bad {
        (
            SprayStatus::Bad,
            format!("โอกาสฝน {}% - หลีกเลี่ยงการพ่นยา-ปุ๋ย", rain),
            format!("Rain chance {}% - avoid spraying", rain),
        )
    } else if day.avg_wind_kmh > d.wind_warn {
        (
            SprayStatus::Caution,
            format!("ลมแรง {} กม./ชม. - ยาอาจไม่ติดใบ", wind),
            format!("Windy {} km/h - spray may not stick", wind),
        )
    } else if day.avg_humidity > d.humidity_warn {
        (
            SprayStatus::Caution,
            format!("ความชื้นสูง {}% - ยาอาจไม่แห้ง", humidity),
            format!("High humidity {}% - spray may not dry", humidity),
        )
    } else if day.avg_humidity > d.humidity_watch {
        (
            SprayStatus::Caution,
            format!("ความชื้นค่อนข้างสูง {}% - ระวังการพ่นยา-ปุ๋ย", humidity),
            format!("Humid {}% - spray with care", humidity),
        )
    } else if day.rain_probability > d.rain_prob_warn {
        (
            SprayStatus::Caution,
            format!("โอกาสฝน {}% - ระวังการพ่นยา-ปุ๋ย", rain),
            format!("Rain chance {}% - spray with care", rain),
        )
    } else if day.mid_temp_c() > d.temp_hot {
        (
            SprayStatus::Caution,
            format!("อากาศร้อนมาก {}°C - พ่นช่วงเช้าหรือเย็น", temp),
            format!("Very hot {}°C - spray early or late", temp),
        )
    } else {
        (
            SprayStatus::Good,
            "สภาพอากาศเหมาะสมสำหรับการพ่นยา-ปุ๋ย".to_string(),
            "Conditions suitable for spraying".to_string(),
        )
    }
}
