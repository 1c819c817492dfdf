use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use hat_analytics::Metric;
use hat_ui_common::Lang;
use hat_viz::Theme;

#[derive(Parser, Debug)]
#[command(name = "hat", author, version, about = "Heuristic analysis for pathfinding benchmark results", long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overview report: KPIs and analyses across all algorithms
    Report(ReportArgs),
    /// Machine-learned vs standard heuristic comparison
    Ml(MlArgs),
    /// Quick per-algorithm summary table
    Summary(SummaryArgs),
    /// Export every chart spec as JSON, without the report tables
    Charts(ChartsArgs),
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Where the benchmark CSV comes from.
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Results CSV to load, bypassing the automatic filename chain
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Directory searched for the default result filenames
    /// (defaults to the configured data dir, else the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Presentation overrides shared by the report commands.
#[derive(Args, Debug)]
pub struct PresentationArgs {
    /// Chart theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Language for report headings
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Write one JSON chart spec per chart into this directory
    #[arg(long)]
    pub charts_out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Map size filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub map_size: String,

    /// Difficulty filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub difficulty: String,

    /// Algorithm filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub algorithm: String,

    /// Metric for the heuristic distribution chart
    #[arg(long, value_enum, default_value_t = MetricArg::Nodes)]
    pub metric: MetricArg,

    #[command(flatten)]
    pub presentation: PresentationArgs,
}

#[derive(Args, Debug)]
pub struct MlArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Map size filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub map_size: String,

    /// Difficulty filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub difficulty: String,

    /// ML model to evaluate ("ALL" aggregates every learned model)
    #[arg(long, default_value = "ALL")]
    pub model: String,

    /// Standard heuristic to compare against (defaults to the dataset's
    /// ground-truth heuristic)
    #[arg(long)]
    pub compare: Option<String>,

    #[command(flatten)]
    pub presentation: PresentationArgs,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Map size filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub map_size: String,

    /// Difficulty filter ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub difficulty: String,

    /// Algorithm filter for the overview charts ("ALL" for no constraint)
    #[arg(long, default_value = "ALL")]
    pub algorithm: String,

    /// Metric for the heuristic distribution chart
    #[arg(long, value_enum, default_value_t = MetricArg::Nodes)]
    pub metric: MetricArg,

    /// ML model for the comparison charts ("ALL" aggregates every model)
    #[arg(long, default_value = "ALL")]
    pub model: String,

    /// Standard heuristic to compare against
    #[arg(long)]
    pub compare: Option<String>,

    /// Chart theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Output directory for the chart spec JSON files
    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MetricArg {
    Nodes,
    Time,
    Cost,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Nodes => Metric::Nodes,
            MetricArg::Time => Metric::Time,
            MetricArg::Cost => Metric::Cost,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LangArg {
    En,
    Fa,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Fa => Lang::Fa,
        }
    }
}

/// Build the full command tree, for completions generation.
pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn report_defaults_to_wildcards() {
        let cli = Cli::parse_from(["hat", "report"]);
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.map_size, "ALL");
                assert_eq!(args.difficulty, "ALL");
                assert_eq!(args.algorithm, "ALL");
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn ml_accepts_model_and_compare() {
        let cli = Cli::parse_from([
            "hat",
            "ml",
            "--model",
            "MLP",
            "--compare",
            "SCALED_MANHATTAN",
        ]);
        match cli.command {
            Some(Commands::Ml(args)) => {
                assert_eq!(args.model, "MLP");
                assert_eq!(args.compare.as_deref(), Some("SCALED_MANHATTAN"));
            }
            other => panic!("expected ml, got {other:?}"),
        }
    }
}
