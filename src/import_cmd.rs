//! Import command: W2 file -> converted series -> CSV / JSON sinks.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use w2dss_io::{read_records, write_series_csv, write_series_json};
use w2dss_series::assemble;

use crate::cli::ImportArgs;
use crate::convert;
use crate::pipeline;

/// Run the import pipeline.
pub fn run(args: ImportArgs) -> Result<()> {
    let _cmd = info_span!("import").entered();

    // 1. Load project TOML and resolve overrides
    let config = pipeline::load_config(&args.input.config)?;
    let input = pipeline::resolve_input(&args.input, &config)?;
    let reader_cfg = convert::build_reader_config(&config.input)?;
    let metadata = convert::build_metadata(&config.series)?;
    let path = convert::build_path(&config.path);

    // 2. Read raw records
    info!(path = %input.path.display(), "reading w2 records");
    let records = read_records(&input.path, &reader_cfg)
        .with_context(|| format!("failed to read W2 file: {}", input.path.display()))?;
    if records.is_empty() {
        bail!("no records after the header in {}", input.path.display());
    }
    records
        .validate()
        .with_context(|| format!("invalid records in {}", input.path.display()))?;

    // 3. Convert timestamps
    let dates = pipeline::convert_dates(records.jdays(), input.reference_year)?;
    let times = pipeline::hec_times(&dates)?;

    // 4. Assemble
    let (_, values) = records.into_parts();
    let series = assemble(times, values, metadata, path).context("failed to assemble series")?;
    info!(
        full_name = %series.full_name(),
        n = series.number_values(),
        "series assembled"
    );

    // 5. Sinks
    let csv = args.csv.or(config.output.csv);
    let json = args.json.or(config.output.json);
    if csv.is_none() && json.is_none() {
        warn!("no sinks configured: set [output].csv / [output].json or use --csv / --json");
    }
    if let Some(p) = csv {
        write_series_csv(&p, &series)
            .with_context(|| format!("failed to write CSV: {}", p.display()))?;
    }
    if let Some(p) = json {
        write_series_json(&p, &series)
            .with_context(|| format!("failed to write JSON: {}", p.display()))?;
    }

    Ok(())
}
