// Command-line entry point: read a KML file, list its points, emit CSV

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use kml_extract::{extract, format_listing, render, OutputConfig, OutputFormat};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Extract named Point placemarks from a KML file
#[derive(Debug, Parser)]
#[command(name = "kml-extract", version, about)]
struct Cli {
    /// KML file to read
    input: PathBuf,

    /// Write the rendered output to this file (overrides KML_OUTPUT_PATH)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: csv or json (overrides KML_OUTPUT_FORMAT)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Skip the per-placemark console listing
    #[arg(long)]
    no_listing: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,kml_extract=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = Config::from_env()
        .context("Failed to load configuration")?
        .into_output_config(cli.output, cli.format, cli.no_listing);

    let markup = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    tracing::info!(path = %cli.input.display(), bytes = markup.len(), "Read KML");

    run(&markup, &output)
}

fn run(markup: &str, output: &OutputConfig) -> Result<()> {
    let records = extract(markup);

    if output.print_listing {
        print!("{}", format_listing(&records));
    }

    if records.is_empty() {
        tracing::warn!("No placemarks extracted");
        return Ok(());
    }

    let missing = records.iter().filter(|r| !r.has_coordinates()).count();
    if missing > 0 {
        tracing::warn!(missing, "Placemarks with a Point but no coordinates");
    }

    let rendered = render(&records, output.format).context("Failed to render records")?;
    println!();
    println!("{} formatted output:", output.format.extension().to_uppercase());
    print!("{rendered}");

    if let Some(path) = &output.output_path {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            records = records.len(),
            "Data saved"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kml_extract::testing::inspection_path;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "kml-extract",
            "nodes.kml",
            "-o",
            "out.json",
            "--format",
            "json",
            "--no-listing",
        ]);

        assert_eq!(cli.input, PathBuf::from("nodes.kml"));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_listing);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["kml-extract", "nodes.kml", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_run_writes_output_file() {
        let path = std::env::temp_dir().join(format!("kml-extract-{}.csv", std::process::id()));
        let output = OutputConfig::new()
            .with_listing(false)
            .with_output_path(&path);

        run(&inspection_path().build(), &output).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(written.starts_with("Name,Longitude,Latitude,Altitude\n\"BEND 03\","));
        assert_eq!(written.lines().count(), 4);
    }

    #[test]
    fn test_run_writes_newline_terminated_json() {
        let path = std::env::temp_dir().join(format!("kml-extract-{}.json", std::process::id()));
        let output = OutputConfig::new()
            .with_format(OutputFormat::Json)
            .with_listing(false)
            .with_output_path(&path);

        run(&inspection_path().with_empty_point("RED 02").build(), &output).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(written.ends_with("]\n"));
        assert!(written.contains("\"Coordinates not found\""));
    }

    #[test]
    fn test_run_with_no_records_writes_nothing() {
        let path = std::env::temp_dir().join(format!("kml-extract-empty-{}.csv", std::process::id()));
        let output = OutputConfig::new().with_output_path(&path);

        run("<kml><Document></Document></kml>", &output).unwrap();

        assert!(!path.exists());
    }
}
