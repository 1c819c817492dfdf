//! Shared command plumbing: session resolution, table output, chart export.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tabwriter::TabWriter;
use tracing::info;

use hat_analytics::{overview, MlReport, Metric};
use hat_core::{NormalizedRecord, NormalizerConfig};
use hat_io::PRIMARY_RESULTS_FILE;
use hat_ui_common::{text, Error as UiError, HatConfig, Lang, SessionState};
use hat_viz::{builders, ChartSpec, Theme};

use hat_cli::cli::DataArgs;

/// Display string for a UI key, falling back to the key itself.
pub fn t(key: &'static str, lang: Lang) -> &'static str {
    text(key, lang).unwrap_or(key)
}

/// Resolve the dataset for a command. An explicit `--data` path wins; the
/// automatic filename chain otherwise runs from `--dir` (or the configured
/// data dir, or the current directory). When the chain is exhausted the
/// command fails with a hint to pass `--data`, the CLI rendition of the
/// manual file picker.
pub fn load_session(
    data: &DataArgs,
    config: &HatConfig,
    normalizer: NormalizerConfig,
) -> Result<SessionState> {
    let mut session = SessionState::from_config(config, normalizer);

    match &data.data {
        Some(path) => {
            session
                .load_manual(path)
                .map(|_| ())
                .with_context(|| format!("loading {}", path.display()))?;
        }
        None => {
            let root = data
                .dir
                .clone()
                .or_else(|| config.core.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let outcome = session.load_auto(root.join(PRIMARY_RESULTS_FILE)).map(|_| ());
            match outcome {
                Ok(()) => {}
                Err(err @ UiError::ManualSelectionRequired { .. }) => {
                    bail!("{err}; pass --data <file> to select a results file")
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(session)
}

/// Print aligned `label: value` rows.
pub fn print_kpis(rows: &[(String, String)]) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout());
    for (label, value) in rows {
        writeln!(writer, "{label}\t{value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// `↓ 40.0%` for favourable reductions, `↑` otherwise.
pub fn format_reduction(reduction: f64) -> String {
    let arrow = if reduction > 0.0 { "↓" } else { "↑" };
    format!("{arrow} {:.1}%", reduction.abs())
}

/// All overview chart specs for the current subset, plus the ML bonus chart
/// when the full dataset has comparable rows.
pub fn overview_chart_specs(
    records: &[NormalizedRecord],
    rows: &[&NormalizedRecord],
    metric: Metric,
    theme: Theme,
) -> Vec<ChartSpec> {
    let mut specs = vec![
        builders::heuristic_efficiency(&overview::heuristic_distribution(rows, metric), metric, theme),
        builders::memory_wall(&overview::memory_wall(rows), theme),
        builders::failure_rates(&overview::failure_rates(rows), theme),
        builders::time_space_tradeoff(&overview::time_space_tradeoff(rows), theme),
    ];
    if let Some(bonus) = overview::ml_bonus(records) {
        specs.push(builders::ml_bonus(&bonus, theme));
    }
    specs
}

/// The three ML comparison chart specs.
pub fn ml_chart_specs(report: &MlReport, theme: Theme) -> Vec<ChartSpec> {
    vec![
        builders::ml_efficiency(report, theme),
        builders::ml_distribution(report, theme),
        builders::ml_time(report, theme),
    ]
}

/// Write every spec as `<target_id>.json` under `dir`.
pub fn write_specs(specs: &[ChartSpec], dir: &Path) -> Result<()> {
    for spec in specs {
        let path = spec.write_to_dir(dir)?;
        info!("chart spec written to {}", path.display());
    }
    println!("{} chart spec(s) written to {}", specs.len(), dir.display());
    Ok(())
}
