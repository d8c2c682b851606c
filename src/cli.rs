use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert CE-QUAL-W2 Julian-day series into labelled DSS-style series.
#[derive(Parser)]
#[command(
    name = "w2dss",
    version,
    about = "Convert CE-QUAL-W2 Julian-day series into labelled DSS-style series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a W2 file into a series and write the configured sinks.
    Import(ImportArgs),
    /// Write the gaps between consecutive Julian days as paired data.
    Diff(DiffArgs),
    /// Print every converted timestamp.
    Dates(DatesArgs),
}

/// Input overrides shared by `import` and `dates`.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "w2dss.toml")]
    pub config: PathBuf,

    /// Override [input].path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override [input].reference_year from config.
    #[arg(short = 'y', long = "reference-year")]
    pub reference_year: Option<i32>,
}

/// Arguments for the `import` subcommand.
#[derive(clap::Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override [output].csv from config.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Override [output].json from config.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `diff` subcommand.
///
/// Differences are taken on raw Julian days, so no reference year is needed.
#[derive(clap::Args)]
pub struct DiffArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "w2dss.toml")]
    pub config: PathBuf,

    /// Override [input].path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override [diff].csv from config.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Override [diff].json from config.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args)]
pub struct DatesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output notation.
    #[arg(short, long, value_enum, default_value_t = DateFormat::Hec)]
    pub format: DateFormat,
}

/// Date notation for the `dates` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DateFormat {
    /// `05Mar2014 1330`
    Hec,
    /// `03/05/2014 13:30`
    Excel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_rejects_reference_year() {
        assert!(Cli::try_parse_from(["w2dss", "diff", "--reference-year", "2014"]).is_err());
        assert!(Cli::try_parse_from(["w2dss", "diff", "-y", "2014"]).is_err());
    }

    #[test]
    fn diff_accepts_config_and_input() {
        let cli = Cli::try_parse_from(["w2dss", "diff", "-c", "p.toml", "-i", "qin.npt"]).unwrap();
        match cli.command {
            Command::Diff(args) => {
                assert_eq!(args.config, PathBuf::from("p.toml"));
                assert_eq!(args.input, Some(PathBuf::from("qin.npt")));
            }
            _ => panic!("expected diff"),
        }
    }

    #[test]
    fn import_and_dates_accept_reference_year() {
        let cli = Cli::try_parse_from(["w2dss", "import", "-y", "2014"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Import(ImportArgs { input: InputArgs { reference_year: Some(2014), .. }, .. })
        ));
        let cli = Cli::try_parse_from(["w2dss", "dates", "--reference-year", "2017", "-f", "excel"])
            .unwrap();
        match cli.command {
            Command::Dates(args) => {
                assert_eq!(args.input.reference_year, Some(2017));
                assert_eq!(args.format, DateFormat::Excel);
            }
            _ => panic!("expected dates"),
        }
    }
}
