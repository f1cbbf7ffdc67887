use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spraywise", version, about = "Weather-based spray window advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spray advice for the next 12 forecast slots
    Advise {
        #[command(flatten)]
        source: ForecastSource,

        /// Evaluation time (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Per-day spray outlook for the coming week
    Outlook {
        #[command(flatten)]
        source: ForecastSource,

        /// Print the outlook as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a new config interactively
    Init,
    /// Validate config and test the weather provider
    Check,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ForecastSource {
    /// Read readings from a JSON file instead of the weather provider
    #[arg(short, long, conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Use a built-in synthetic forecast
    #[arg(long)]
    pub demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_advise_with_input() {
        let cli = Cli::parse_from([
            "spraywise",
            "-vv",
            "advise",
            "--input",
            "hours.json",
            "--now",
            "2025-06-01T06:00:00+07:00",
            "--json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Advise { source, now, json } => {
                assert_eq!(source.input, Some(PathBuf::from("hours.json")));
                assert!(!source.demo);
                assert_eq!(now.as_deref(), Some("2025-06-01T06:00:00+07:00"));
                assert!(json);
            }
            _ => panic!("expected advise"),
        }
    }

    #[test]
    fn input_and_demo_conflict() {
        let result = Cli::try_parse_from(["spraywise", "outlook", "--demo", "--input", "x.json"]);
        assert!(result.is_err());
    }
}
