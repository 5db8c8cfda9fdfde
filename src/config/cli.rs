use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wear-logger")]
#[command(about = "Track vehicle part wear against service intervals")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Part to calculate (exact catalog name or its number from --list-parts)
    #[arg(short, long)]
    pub part: Option<String>,

    /// Odometer reading at the last service, in km
    #[arg(short, long, requires = "part")]
    pub last: Option<String>,

    /// Current odometer reading, in km
    #[arg(long = "current", requires = "part")]
    pub current: Option<String>,

    /// List the known parts and their lifespans
    #[arg(long)]
    pub list_parts: bool,

    /// Print the wear calculation procedure
    #[arg(long)]
    pub show_logic: bool,

    /// Write the session table to this file (.csv, .tsv or .json)
    #[arg(long)]
    pub export: Option<String>,

    /// Width of the chart bars, in characters
    #[arg(long)]
    pub chart_width: Option<usize>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// One-shot mode: a part was given on the command line.
    pub fn is_one_shot(&self) -> bool {
        self.part.is_some()
    }

    /// Loads the configuration file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(width) = self.chart_width {
            config.chart.width = Some(width);
            tracing::debug!("Chart width overridden to: {}", width);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(part) = &self.part {
            validation::validate_non_empty_string("part", part)?;
        }
        if let Some(path) = &self.export {
            validation::validate_path("export", path)?;
        }
        Ok(())
    }
}
