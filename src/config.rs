use crate::error::{Result, SprayError};
use chrono::FixedOffset;
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    pub openweathermap: Option<OpenWeatherMapConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub name: String,
    pub subdistrict: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

fn default_utc_offset_hours() -> i32 {
    7
}

impl LocationConfig {
    /// Fixed offset used for local clock times, falling back to UTC+7
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                tracing::warn!(
                    utc_offset_hours = self.utc_offset_hours,
                    "Invalid UTC offset, using +07:00"
                );
                bangkok_offset()
            })
    }
}

pub(crate) fn bangkok_offset() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("+07:00 is within the offset range")
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SprayError::Config(format!(
                "Config file not found at {:?}. Run `spraywise init` to set up.",
                config_path
            )));
        }

        tracing::debug!(path = %config_path.display(), "Loading configuration");

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SprayError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` placeholders from the environment
    pub fn parse(content: &str) -> Result<Self> {
        let config_str = Self::substitute_env_vars(content);

        serde_yaml::from_str(&config_str)
            .map_err(|e| SprayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// The OpenWeatherMap section, if present, enabled and keyed
    pub fn weather_provider(&self) -> Option<&OpenWeatherMapConfig> {
        self.openweathermap
            .as_ref()
            .filter(|c| c.enabled && !c.api_key.is_empty())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("spraywise").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/spraywise/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SprayError::Config("Cannot determine config directory".into()))?
            .join("spraywise");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up spraywise!");
        println!();

        println!("Farm location");
        let name: String = prompt("  Field name", "Rice field".into())?;
        let subdistrict: String = prompt("  Subdistrict", "Bang Khen".into())?;
        let province: String = prompt("  Province", "Bangkok".into())?;
        let latitude: f64 = prompt("  Latitude", 13.87)?;
        let longitude: f64 = prompt("  Longitude", 100.6)?;
        let utc_offset_hours: i32 = prompt("  UTC offset (hours)", 7)?;

        println!();

        println!("OpenWeatherMap (leave API key blank to skip)");
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| SprayError::Config(format!("Input error: {}", e)))?;

        let openweathermap = if api_key.is_empty() {
            None
        } else {
            Some(OpenWeatherMapConfig {
                api_key,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            location: LocationConfig {
                name,
                subdistrict,
                province,
                latitude,
                longitude,
                utc_offset_hours,
            },
            openweathermap,
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| SprayError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# spraywise configuration\n# Generated by `spraywise init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

fn prompt<T>(label: &str, default: T) -> Result<T>
where
    T: Clone + std::fmt::Display + std::str::FromStr,
    T::Err: std::fmt::Display + std::fmt::Debug,
{
    Input::new()
        .with_prompt(label)
        .default(default)
        .interact_text()
        .map_err(|e| SprayError::Config(format!("Input error: {}", e)))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                name: "Rice field".into(),
                subdistrict: "Bang Khen".into(),
                province: "Bangkok".into(),
                latitude: 13.87,
                longitude: 100.6,
                utc_offset_hours: default_utc_offset_hours(),
            },
            openweathermap: None,
        }
    }
}
