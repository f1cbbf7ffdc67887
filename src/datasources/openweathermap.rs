use crate::config::{LocationConfig, OpenWeatherMapConfig};
use crate::error::{Result, SprayError};
use crate::models::HourlyReading;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const MS_TO_KMH: f64 = 3.6;

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
    latitude: f64,
    longitude: f64,
    offset: FixedOffset,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    wind: OwmWind,
    #[serde(default)]
    pop: f64, // probability of precipitation, 0-1
    #[serde(default)]
    rain: Option<OwmPrecipitation>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64, // m/s with units=metric
}

#[derive(Debug, Deserialize)]
struct OwmPrecipitation {
    #[serde(rename = "3h", default)]
    three_hour: f64,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig, location: &LocationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            latitude: location.latitude,
            longitude: location.longitude,
            offset: location.utc_offset(),
        }
    }

    /// Fetch the 5-day/3-hour forecast as readings in local time
    pub async fn fetch_hourly(&self) -> Result<Vec<HourlyReading>> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, self.latitude, self.longitude, self.config.api_key
        );

        tracing::debug!(lat = self.latitude, lon = self.longitude, "Requesting OpenWeatherMap forecast");

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                SprayError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SprayError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let readings = parse_forecast(&body, self.offset)?;

        tracing::info!(points = readings.len(), "Weather forecast updated");
        Ok(readings)
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, self.latitude, self.longitude, self.config.api_key
        );

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                SprayError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        Ok(response.status().is_success())
    }
}

/// Convert a forecast response body into time-ordered readings
pub fn parse_forecast(body: &str, offset: FixedOffset) -> Result<Vec<HourlyReading>> {
    let response: OwmForecastResponse = serde_json::from_str(body)?;

    let mut readings = response
        .list
        .iter()
        .map(|item| convert_forecast_item(item, offset))
        .collect::<Result<Vec<_>>>()?;

    readings.sort_by_key(|r| r.timestamp);
    Ok(readings)
}

fn convert_forecast_item(item: &OwmForecastItem, offset: FixedOffset) -> Result<HourlyReading> {
    let timestamp = DateTime::from_timestamp(item.dt, 0)
        .ok_or_else(|| SprayError::InvalidData(format!("forecast timestamp out of range: {}", item.dt)))?
        .with_timezone(&offset);

    let mut reading = HourlyReading::new(
        timestamp,
        item.pop * 100.0,
        item.wind.speed * MS_TO_KMH,
        item.main.humidity,
        item.main.temp,
    );
    if let Some(rain) = &item.rain {
        reading = reading.with_rain_mm(rain.three_hour);
    }

    Ok(reading)
}
