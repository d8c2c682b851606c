//! CSV sinks for finished series and paired data.

use std::path::Path;

use tracing::info;
use w2dss_calendar::excel_serial;
use w2dss_series::{PairedDataContainer, SeriesContainer};

use crate::error::IoError;

/// Renders a series as CSV.
///
/// The header is `Excel Date #,{C}`. Each row holds the Excel serial date of
/// the timestamp (HEC minutes) with 5 decimals and the value with 3.
pub fn series_to_csv(series: &SeriesContainer) -> String {
    let mut out = String::with_capacity(24 * (series.number_values() + 1));
    out.push_str(&format!("Excel Date #,{}\n", series.parameter()));
    for (t, v) in series.iter() {
        out.push_str(&format!("{:.5},{:.3}\n", excel_serial(t), v));
    }
    out
}

/// Renders paired data as CSV: `{x_units},{label...}` then one row per ordinate.
pub fn paired_to_csv(paired: &PairedDataContainer) -> String {
    let mut out = format!("{},{}\n", paired.x_units(), paired.labels().join(","));
    for (i, x) in paired.x().iter().enumerate() {
        let row: Vec<String> = std::iter::once(format!("{x:.5}"))
            .chain(paired.curves().iter().map(|curve| format!("{:.5}", curve[i])))
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Writes `contents` to `path`, creating missing parent directories.
pub(crate) fn write_text(path: &Path, contents: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| IoError::io(path, e))
}

/// Writes a series CSV (see [`series_to_csv`]).
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file or its parent directory cannot be written.
pub fn write_series_csv(path: &Path, series: &SeriesContainer) -> Result<(), IoError> {
    write_text(path, &series_to_csv(series))?;
    info!(
        path = %path.display(),
        full_name = %series.full_name(),
        rows = series.number_values(),
        "wrote series csv"
    );
    Ok(())
}

/// Writes a paired-data CSV (see [`paired_to_csv`]).
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file or its parent directory cannot be written.
pub fn write_paired_csv(path: &Path, paired: &PairedDataContainer) -> Result<(), IoError> {
    write_text(path, &paired_to_csv(paired))?;
    info!(
        path = %path.display(),
        full_name = %paired.full_name(),
        rows = paired.number_ordinates(),
        "wrote paired csv"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use w2dss_series::{DataType, DssPath, SeriesMetadata, assemble};

    fn series() -> SeriesContainer {
        // 01Jan2014 00:00 and 01Jan2014 18:00 in HEC minutes.
        let base = 41639 * 1440;
        assemble(
            vec![base, base + 18 * 60],
            vec![12.5, 13.0],
            SeriesMetadata::new("cms", DataType::PerAvg),
            DssPath::new("W", "B", "Flow", "", "IR-MONTH", "V"),
        )
        .unwrap()
    }

    #[test]
    fn series_csv_layout() {
        assert_eq!(
            series_to_csv(&series()),
            "Excel Date #,Flow\n41640.00000,12.500\n41640.75000,13.000\n"
        );
    }

    #[test]
    fn paired_csv_layout() {
        let paired = PairedDataContainer::new(
            vec![1.0, 2.5],
            vec![vec![0.5, 1.0], vec![3.0, 4.0]],
            "Julian Day",
            "Days",
            &DssPath::default(),
            vec!["JDAY".to_string(), "Other".to_string()],
        )
        .unwrap();
        assert_eq!(
            paired_to_csv(&paired),
            "Julian Day,JDAY,Other\n1.00000,0.50000,3.00000\n2.50000,1.00000,4.00000\n"
        );
    }
}
