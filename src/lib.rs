//! Spray window advice for smallholder farms.
//!
//! The core is [`logic::SprayWindowService`], a pure function of a short
//! forecast and the current time. Config loading, the weather provider client
//! and terminal rendering live alongside it for the `spraywise` binary.

pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod output;

pub use error::{Result, SprayError};
pub use logic::SprayWindowService;
pub use models::{HourlyReading, SprayRecommendation, SprayStatus};
