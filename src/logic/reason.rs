use super::calculations::{round_display, WindowStats};
use super::thresholds::THRESHOLDS;
use crate::models::{Factor, HourlyReading, SprayIcon, SprayStatus};

/// Advice text for one verdict, rendered in both languages from the same branch
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub factor: Factor,
    pub local: String,
    pub english: String,
}

impl Explanation {
    fn new(factor: Factor, local: String, english: String) -> Self {
        Self {
            factor,
            local,
            english,
        }
    }

    pub fn icon(&self) -> SprayIcon {
        self.factor.icon()
    }

    /// Shown when there is no forecast to judge
    pub fn no_data() -> Self {
        Self::new(
            Factor::Suitable,
            "ไม่มีข้อมูลพยากรณ์อากาศ - แนะนำให้พ่นยา-ปุ๋ยช่วงเช้า".to_string(),
            "No forecast data - spraying in the early morning is suggested".to_string(),
        )
    }

    /// Explain `status`. Causes are checked rain, wind, humidity, heat.
    pub fn for_status(status: SprayStatus, stats: &WindowStats, readings: &[HourlyReading]) -> Self {
        match status {
            SprayStatus::Bad => Self::bad(stats, readings),
            SprayStatus::Caution => Self::caution(stats),
            SprayStatus::Good => Self::good(stats),
        }
    }

    fn bad(stats: &WindowStats, readings: &[HourlyReading]) -> Self {
        let t = &THRESHOLDS;

        if stats.max_rain_prob >= t.rain_prob_bad {
            let hours = hours_until(readings, |r| r.rain_probability >= t.rain_prob_bad);
            let prob = round_display(stats.max_rain_prob);
            Self::new(
                Factor::Rain,
                format!("มีฝน {}% ใน {} ชม. ข้างหน้า - งดพ่นยา-ปุ๋ย", prob, hours),
                format!("Rain {}% within the next {}h - do not spray", prob, hours),
            )
        } else if stats.max_rain_mm >= t.rain_mm_bad {
            let hours = hours_until(readings, |r| r.rain_mm() >= t.rain_mm_bad);
            Self::new(
                Factor::Rain,
                format!(
                    "ฝนตก {:.1} มม. ใน {} ชม. ข้างหน้า - ยา-ปุ๋ยจะถูกชะล้าง",
                    stats.max_rain_mm, hours
                ),
                format!(
                    "{:.1} mm of rain within the next {}h - spray will wash off",
                    stats.max_rain_mm, hours
                ),
            )
        } else if stats.max_wind >= t.wind_bad {
            let wind = round_display(stats.max_wind);
            Self::new(
                Factor::Wind,
                format!("ลมแรง {} กม./ชม. - ละอองยาจะปลิวไม่ติดใบ", wind),
                format!("Strong wind {} km/h - spray will drift away", wind),
            )
        } else if stats.median_humidity >= t.humidity_bad {
            let humidity = round_display(stats.median_humidity);
            Self::new(
                Factor::Humidity,
                format!("ความชื้นสูงมาก {}% - ยา-ปุ๋ยจะไม่แห้ง", humidity),
                format!("Very high humidity {}% - spray won't dry", humidity),
            )
        } else {
            let temp = round_display(stats.median_temp);
            Self::new(
                Factor::Heat,
                format!("อากาศร้อนจัด {}°C - ยา-ปุ๋ยจะระเหยเร็วเกินไป", temp),
                format!("Very hot {}°C - spray will evaporate too fast", temp),
            )
        }
    }

    fn caution(stats: &WindowStats) -> Self {
        let t = &THRESHOLDS;

        if stats.median_rain_prob >= t.rain_prob_warn {
            let prob = round_display(stats.median_rain_prob);
            Self::new(
                Factor::Rain,
                format!("โอกาสฝน {}% - ระวังการพ่นยา-ปุ๋ย", prob),
                format!("Rain chance {}% - be careful when spraying", prob),
            )
        } else if stats.max_rain_mm >= t.rain_mm_warn {
            Self::new(
                Factor::Rain,
                format!("อาจมีฝนเล็กน้อย {:.1} มม. - ระวังการชะล้าง", stats.max_rain_mm),
                format!("Light rain {:.1} mm possible - watch for wash-off", stats.max_rain_mm),
            )
        } else if stats.median_wind >= t.wind_warn {
            let wind = round_display(stats.median_wind);
            Self::new(
                Factor::Wind,
                format!("ลม {} กม./ชม. - ระวังละอองยาปลิว", wind),
                format!("Wind {} km/h - watch for drift", wind),
            )
        } else if stats.median_humidity >= t.humidity_warn {
            let humidity = round_display(stats.median_humidity);
            Self::new(
                Factor::Humidity,
                format!("ความชื้นสูง {}% - ยา-ปุ๋ยแห้งช้า", humidity),
                format!("High humidity {}% - slow drying expected", humidity),
            )
        } else {
            let temp = round_display(stats.median_temp);
            Self::new(
                Factor::Heat,
                format!("อากาศร้อน {}°C - ระวังการระเหยเร็ว", temp),
                format!("Hot {}°C - watch for fast evaporation", temp),
            )
        }
    }

    fn good(stats: &WindowStats) -> Self {
        let t = &THRESHOLDS;

        let wind = round_display(stats.median_wind);
        let humidity = round_display(stats.median_humidity);

        // judged on the figures the message shows
        if wind as f64 <= t.wind_ideal && humidity as f64 <= t.humidity_ideal {
            Self::new(
                Factor::Ideal,
                format!(
                    "อากาศดีมาก - ลม {} กม./ชม. ความชื้น {}% เหมาะกับการพ่นยา-ปุ๋ย",
                    wind, humidity
                ),
                format!(
                    "Excellent conditions - wind {} km/h, humidity {}%, ideal for spraying",
                    wind, humidity
                ),
            )
        } else {
            let wind = round_display(stats.max_wind);
            Self::new(
                Factor::Suitable,
                format!("อากาศเหมาะสม - ลมไม่เกิน {} กม./ชม. พ่นยา-ปุ๋ยได้", wind),
                format!("Good conditions - wind up to {} km/h, suitable for spraying", wind),
            )
        }
    }
}

/// 1-based count of readings until the first match; 1 when none matches
fn hours_until(readings: &[HourlyReading], pred: impl Fn(&HourlyReading) -> bool) -> usize {
    readings.iter().position(pred).map(|i| i + 1).unwrap_or(1)
}
