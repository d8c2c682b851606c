//! Diff command: gaps between consecutive Julian days as paired data.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use w2dss_io::{read_julian_days, write_paired_csv, write_paired_json};
use w2dss_series::julian_day_differences;

use crate::cli::DiffArgs;
use crate::convert;
use crate::pipeline;

/// Run the Julian-day difference pipeline.
pub fn run(args: DiffArgs) -> Result<()> {
    let _cmd = info_span!("diff").entered();

    let config = pipeline::load_config(&args.config)?;
    let input = pipeline::input_path(args.input.as_deref(), &config)?;
    let path = convert::build_path(&config.path);

    info!(path = %input.display(), "reading julian days");
    let jdays = read_julian_days(&input, config.input.header_lines)
        .with_context(|| format!("failed to read W2 file: {}", input.display()))?;

    let paired = julian_day_differences(&jdays, &config.diff.x_units, &config.diff.y_units, &path)
        .context("failed to compute julian day differences")?;
    let gaps = &paired.curves()[0];
    let backsteps = gaps.iter().filter(|g| **g <= 0.0).count();
    info!(
        full_name = %paired.full_name(),
        n = paired.number_ordinates(),
        backsteps,
        "julian day differences computed"
    );
    if backsteps > 0 {
        warn!(backsteps, "julian days are not strictly increasing");
    }

    let csv = args.csv.or(config.diff.csv);
    let json = args.json.or(config.diff.json);
    if csv.is_none() && json.is_none() {
        warn!("no sinks configured: set [diff].csv / [diff].json or use --csv / --json");
    }
    if let Some(p) = csv {
        write_paired_csv(&p, &paired)
            .with_context(|| format!("failed to write CSV: {}", p.display()))?;
    }
    if let Some(p) = json {
        write_paired_json(&p, &paired)
            .with_context(|| format!("failed to write JSON: {}", p.display()))?;
    }

    Ok(())
}
