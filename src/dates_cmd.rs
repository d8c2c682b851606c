//! Dates command: print converted timestamps.

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use w2dss_calendar::DateParts;
use w2dss_io::read_julian_days;

use crate::cli::{DateFormat, DatesArgs};
use crate::pipeline;

/// Print one converted timestamp per Julian day.
pub fn run(args: DatesArgs) -> Result<()> {
    let _cmd = info_span!("dates").entered();

    let config = pipeline::load_config(&args.input.config)?;
    let input = pipeline::resolve_input(&args.input, &config)?;

    info!(path = %input.path.display(), "reading julian days");
    let jdays = read_julian_days(&input.path, config.input.header_lines)
        .with_context(|| format!("failed to read W2 file: {}", input.path.display()))?;
    let dates = pipeline::convert_dates(&jdays, input.reference_year)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    write_dates(&mut out, &dates, args.format).context("failed to write to stdout")?;
    out.flush().context("failed to write to stdout")?;

    Ok(())
}

/// Writes one line per date in the chosen notation.
fn write_dates<W: Write>(
    out: &mut W,
    dates: &[DateParts],
    format: DateFormat,
) -> std::io::Result<()> {
    for date in dates {
        let line = match format {
            DateFormat::Hec => date.hec_date_time_string(),
            DateFormat::Excel => date.excel_date_time_string(),
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}
