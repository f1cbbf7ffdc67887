use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use clap::Parser;
use spraywise::cli::{Cli, Commands, ForecastSource};
use spraywise::config::Config;
use spraywise::datasources::{diurnal_forecast, parse_readings, OpenWeatherMapClient};
use spraywise::logic::{daily_outlook, SprayWindowService};
use spraywise::models::HourlyReading;
use spraywise::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
        }
        Commands::Check => {
            let config = Config::load(cli.config)?;
            run_check(&config).await?;
        }
        Commands::Advise { source, now, json } => {
            let config = load_or_default(cli.config, &source)?;
            let offset = config.location.utc_offset();
            let now = match now {
                Some(s) => DateTime::parse_from_rfc3339(&s)
                    .with_context(|| format!("invalid --now timestamp: {}", s))?,
                None => Utc::now().with_timezone(&offset),
            };

            let hours = load_forecast(&config, &source, now).await?;
            let upcoming: Vec<HourlyReading> =
                hours.into_iter().filter(|h| h.timestamp >= now).collect();
            tracing::debug!(readings = upcoming.len(), "Computing spray window");

            let rec = SprayWindowService::new().compute_recommendation(&upcoming, now);

            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                let location = format!(
                    "{}, {}",
                    config.location.subdistrict, config.location.province
                );
                print!("{}", output::render_recommendation(&rec, &location));
            }
        }
        Commands::Outlook { source, json } => {
            let config = load_or_default(cli.config, &source)?;
            let now = Utc::now().with_timezone(&config.location.utc_offset());

            let hours = load_forecast(&config, &source, now).await?;
            let days = daily_outlook(&hours);

            if json {
                println!("{}", serde_json::to_string_pretty(&days)?);
            } else {
                print!("{}", output::render_outlook(&days));
            }
        }
    }

    Ok(())
}

/// File and demo runs work without a config; provider runs need one
fn load_or_default(
    config_override: Option<std::path::PathBuf>,
    source: &ForecastSource,
) -> anyhow::Result<Config> {
    match Config::load(config_override) {
        Ok(config) => Ok(config),
        Err(e) if source.input.is_some() || source.demo => {
            tracing::info!("Using default location: {}", e);
            Ok(Config::default())
        }
        Err(e) => Err(e).context("configuration is required to fetch a forecast"),
    }
}

async fn load_forecast(
    config: &Config,
    source: &ForecastSource,
    now: DateTime<FixedOffset>,
) -> anyhow::Result<Vec<HourlyReading>> {
    if let Some(path) = &source.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return parse_readings(&content, config.location.utc_offset())
            .with_context(|| format!("failed to parse readings in {}", path.display()));
    }

    if source.demo {
        let start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        return Ok(diurnal_forecast(start, 40, 1));
    }

    let Some(owm) = config.weather_provider() else {
        bail!("no weather provider configured; use --input or --demo, or add an openweathermap section");
    };

    let client = OpenWeatherMapClient::new(owm.clone(), &config.location);
    client
        .fetch_hourly()
        .await
        .context("failed to fetch weather forecast")
}

async fn run_check(config: &Config) -> anyhow::Result<()> {
    println!(
        "Location: {} ({}, {}) UTC{}",
        config.location.name,
        config.location.subdistrict,
        config.location.province,
        config.location.utc_offset()
    );

    match config.weather_provider() {
        Some(owm) => {
            let client = OpenWeatherMapClient::new(owm.clone(), &config.location);
            match client.test_connection().await {
                Ok(true) => println!("OpenWeatherMap: OK"),
                Ok(false) => println!("OpenWeatherMap: rejected (check API key)"),
                Err(e) => {
                    tracing::warn!("OpenWeatherMap check failed: {}", e);
                    println!("OpenWeatherMap: OFFLINE");
                }
            }
        }
        None => println!("OpenWeatherMap: not configured"),
    }

    Ok(())
}
