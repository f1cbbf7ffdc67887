use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Overall spray verdict, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprayStatus {
    Good,
    Caution,
    Bad,
}

impl SprayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SprayStatus::Good => "good",
            SprayStatus::Caution => "caution",
            SprayStatus::Bad => "bad",
        }
    }

    pub fn label_local(&self) -> &'static str {
        match self {
            SprayStatus::Good => "พ่นได้",
            SprayStatus::Caution => "ระวัง",
            SprayStatus::Bad => "งดพ่น",
        }
    }

    pub fn label_english(&self) -> &'static str {
        match self {
            SprayStatus::Good => "Spray OK",
            SprayStatus::Caution => "Caution",
            SprayStatus::Bad => "Do not spray",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SprayStatus::Good => "●",
            SprayStatus::Caution => "▲",
            SprayStatus::Bad => "✖",
        }
    }
}

impl std::fmt::Display for SprayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The weather variable that drove a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Rain,
    Wind,
    Humidity,
    Heat,
    Ideal,
    Suitable,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Rain => "rain",
            Factor::Wind => "wind",
            Factor::Humidity => "humidity",
            Factor::Heat => "heat",
            Factor::Ideal => "ideal",
            Factor::Suitable => "suitable",
        }
    }

    /// Short label for the compact first line
    pub fn label_local(&self) -> &'static str {
        match self {
            Factor::Rain => "ฝน",
            Factor::Wind => "ลมแรง",
            Factor::Humidity => "ความชื้นสูง",
            Factor::Heat => "อากาศร้อน",
            Factor::Ideal => "อากาศดี",
            Factor::Suitable => "เหมาะสม",
        }
    }

    pub fn icon(&self) -> SprayIcon {
        match self {
            Factor::Rain => SprayIcon::RainCloud,
            Factor::Wind => SprayIcon::Wind,
            Factor::Humidity => SprayIcon::Droplet,
            Factor::Heat => SprayIcon::Thermometer,
            Factor::Ideal | Factor::Suitable => SprayIcon::Sun,
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprayIcon {
    RainCloud,
    Wind,
    Droplet,
    Thermometer,
    Sun,
}

impl SprayIcon {
    pub fn key(&self) -> &'static str {
        match self {
            SprayIcon::RainCloud => "rain-cloud",
            SprayIcon::Wind => "wind",
            SprayIcon::Droplet => "droplet",
            SprayIcon::Thermometer => "thermometer",
            SprayIcon::Sun => "sun",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SprayIcon::RainCloud => "🌧",
            SprayIcon::Wind => "💨",
            SprayIcon::Droplet => "💧",
            SprayIcon::Thermometer => "🌡",
            SprayIcon::Sun => "☀",
        }
    }
}

/// A merged run of consecutive sprayable readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpan {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub score: f64,
}

impl WindowSpan {
    pub fn span_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprayRecommendation {
    pub status: SprayStatus,
    pub reason_local: String,
    pub reason_english: String,
    pub best_window_local: String,
    pub best_window: Option<WindowSpan>,
    pub generated_at: DateTime<FixedOffset>,
    pub icon: SprayIcon,
    pub factor: Factor,
}
