use anyhow::{Context, Result};
use dotenvy::dotenv;
use kml_extract::{OutputConfig, OutputFormat};
use std::env;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            output_path: env::var("KML_OUTPUT_PATH").ok().map(PathBuf::from),
            output_format: env::var("KML_OUTPUT_FORMAT")
                .ok()
                .map(|value| value.parse::<OutputFormat>())
                .transpose()
                .context("KML_OUTPUT_FORMAT must be csv or json")?,
        })
    }

    /// Merge command-line overrides on top of the environment.
    pub fn into_output_config(
        self,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        no_listing: bool,
    ) -> OutputConfig {
        let mut config = OutputConfig::new()
            .with_format(format.or(self.output_format).unwrap_or_default())
            .with_listing(!no_listing);

        if let Some(path) = output.or(self.output_path) {
            config = config.with_output_path(path);
        }
        config
    }
}
