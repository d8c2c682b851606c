//! Steps shared by every subcommand: config loading, input resolution and
//! Julian-day conversion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use w2dss_calendar::{DateParts, julian_to_dates};

use crate::cli::InputArgs;
use crate::config::W2DssConfig;

/// Loads and parses the TOML config file.
pub fn load_config(path: &Path) -> Result<W2DssConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Input file and reference year after applying CLI overrides.
pub struct ResolvedInput {
    pub path: PathBuf,
    pub reference_year: i32,
}

/// Applies an `--input` override over `[input].path`.
pub fn input_path(cli_input: Option<&Path>, config: &W2DssConfig) -> Result<PathBuf> {
    cli_input
        .map(Path::to_path_buf)
        .or_else(|| config.input.path.clone())
        .ok_or_else(|| anyhow!("no input path: set [input].path in config or use --input"))
}

/// Applies `--input` / `--reference-year` over the `[input]` section.
pub fn resolve_input(args: &InputArgs, config: &W2DssConfig) -> Result<ResolvedInput> {
    let path = input_path(args.input.as_deref(), config)?;
    let reference_year = args
        .reference_year
        .or(config.input.reference_year)
        .ok_or_else(|| {
            anyhow!("no reference year: set [input].reference_year in config or use --reference-year")
        })?;
    Ok(ResolvedInput {
        path,
        reference_year,
    })
}

/// Converts every Julian day and logs the year span covered.
pub fn convert_dates(jdays: &[f64], reference_year: i32) -> Result<Vec<DateParts>> {
    let dates = julian_to_dates(jdays, reference_year).context("julian day conversion failed")?;
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        info!(
            n = dates.len(),
            reference_year,
            first = %first,
            last = %last,
            years = last.year() - first.year() + 1,
            "converted julian days"
        );
    }
    Ok(dates)
}

/// Encodes dates as HEC minutes since 31 Dec 1899.
pub fn hec_times(dates: &[DateParts]) -> Result<Vec<i64>> {
    dates
        .iter()
        .map(|d| d.hec_minutes())
        .collect::<Result<Vec<_>, _>>()
        .context("failed to encode HEC times")
}
