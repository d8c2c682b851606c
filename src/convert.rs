//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};

use w2dss_io::ReaderConfig;
use w2dss_series::{DataType, DssPath, Interval, SeriesMetadata};

use crate::config::*;

/// Parses a data type label. Unknown labels are kept verbatim with code 0.
pub fn parse_data_type(s: &str) -> DataType {
    DataType::from_label(&s.trim().to_uppercase())
}

/// Parses an interval code (-1 irregular, otherwise minutes > 0).
pub fn parse_interval(code: i32) -> Result<Interval> {
    Interval::from_code(code).context("invalid [series].interval")
}

/// Builds a [`ReaderConfig`] from the TOML input configuration.
pub fn build_reader_config(input: &InputToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_header_lines(input.header_lines)
        .with_value_column(input.value_column);
    cfg.validate().context("invalid [input] section")?;
    Ok(cfg)
}

/// Builds a [`DssPath`] from the TOML path parts.
pub fn build_path(path: &PathToml) -> DssPath {
    DssPath::new(&path.a, &path.b, &path.c, &path.d, &path.e, &path.f)
}

/// Builds [`SeriesMetadata`] from the TOML series configuration.
pub fn build_metadata(series: &SeriesToml) -> Result<SeriesMetadata> {
    let interval = parse_interval(series.interval)?;
    Ok(SeriesMetadata::new(&series.units, parse_data_type(&series.data_type))
        .with_interval(interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_type_is_case_insensitive() {
        assert_eq!(parse_data_type("per-avg"), DataType::PerAvg);
        assert_eq!(parse_data_type(" INST-VAL "), DataType::InstVal);
        assert_eq!(parse_data_type("inst-cum").code(), 0);
    }

    #[test]
    fn interval_zero_rejected() {
        assert!(parse_interval(0).is_err());
        assert_eq!(parse_interval(-1).unwrap(), Interval::Irregular);
    }

    #[test]
    fn reader_config_rejects_value_column_zero() {
        let input = InputToml {
            value_column: 0,
            ..InputToml::default()
        };
        assert!(build_reader_config(&input).is_err());
    }

    #[test]
    fn path_from_parts() {
        let path = PathToml {
            a: "DeGray Reservoir".to_string(),
            c: "Flow".to_string(),
            ..PathToml::default()
        };
        assert_eq!(build_path(&path).full_name(), "/DeGray Reservoir//Flow////");
    }
}
