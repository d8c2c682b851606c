use std::path::PathBuf;

use serde::Deserialize;

/// Top-level w2dss configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct W2DssConfig {
    /// W2 input file settings.
    #[serde(default)]
    pub input: InputToml,

    /// Six-part identifying path.
    #[serde(default)]
    pub path: PathToml,

    /// Series metadata.
    #[serde(default)]
    pub series: SeriesToml,

    /// Sinks for the `import` command.
    #[serde(default)]
    pub output: OutputToml,

    /// Julian-day difference settings for the `diff` command.
    #[serde(default)]
    pub diff: DiffToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub path: Option<PathBuf>,
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,
    #[serde(default = "default_value_column")]
    pub value_column: usize,
    pub reference_year: Option<i32>,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            path: None,
            header_lines: default_header_lines(),
            value_column: default_value_column(),
            reference_year: None,
        }
    }
}

fn default_header_lines() -> usize {
    3
}
fn default_value_column() -> usize {
    1
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PathToml {
    #[serde(default)]
    pub a: String,
    #[serde(default)]
    pub b: String,
    #[serde(default)]
    pub c: String,
    #[serde(default)]
    pub d: String,
    #[serde(default)]
    pub e: String,
    #[serde(default)]
    pub f: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesToml {
    #[serde(default)]
    pub units: String,
    #[serde(default = "default_data_type")]
    pub data_type: String,
    #[serde(default = "default_interval")]
    pub interval: i32,
}

impl Default for SeriesToml {
    fn default() -> Self {
        Self {
            units: String::new(),
            data_type: default_data_type(),
            interval: default_interval(),
        }
    }
}

fn default_data_type() -> String {
    "PER-AVG".to_string()
}
fn default_interval() -> i32 {
    -1
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiffToml {
    #[serde(default = "default_x_units")]
    pub x_units: String,
    #[serde(default = "default_y_units")]
    pub y_units: String,
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl Default for DiffToml {
    fn default() -> Self {
        Self {
            x_units: default_x_units(),
            y_units: default_y_units(),
            csv: None,
            json: None,
        }
    }
}

fn default_x_units() -> String {
    "Julian Day".to_string()
}
fn default_y_units() -> String {
    "Days".to_string()
}
