//! `hat summary`: per-algorithm/heuristic dataset summary.

use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tabwriter::TabWriter;

use hat_core::{NormalizedRecord, NormalizerConfig};
use hat_ui_common::HatConfig;

use crate::common;
use hat_cli::cli::{OutputFormat, SummaryArgs};

/// Aggregated statistics for one algorithm/heuristic combination.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub algorithm: String,
    pub heuristic: String,
    pub runs: usize,
    pub success_rate: f64,
    /// Mean nodes expanded over successful runs.
    pub avg_nodes: f64,
    /// Mean wall-clock time over successful runs.
    pub avg_time_ms: f64,
}

/// Compute one summary row per algorithm/heuristic combination, sorted by
/// algorithm then heuristic.
pub fn summarize(records: &[NormalizedRecord]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(String, String), Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.algorithm.clone(), record.heuristic.clone()))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((algorithm, heuristic), rows)| {
            let successes: Vec<&&NormalizedRecord> =
                rows.iter().filter(|r| r.success).collect();
            let avg_nodes = if successes.is_empty() {
                0.0
            } else {
                successes
                    .iter()
                    .filter_map(|r| r.nodes_expanded)
                    .sum::<f64>()
                    / successes.len() as f64
            };
            let avg_time_ms = if successes.is_empty() {
                0.0
            } else {
                successes.iter().map(|r| r.time_ms).sum::<f64>() / successes.len() as f64
            };
            SummaryRow {
                algorithm,
                heuristic,
                runs: rows.len(),
                success_rate: successes.len() as f64 / rows.len() as f64 * 100.0,
                avg_nodes,
                avg_time_ms,
            }
        })
        .collect()
}

pub fn handle(args: &SummaryArgs) -> Result<()> {
    let config = HatConfig::load().unwrap_or_default();
    let session = common::load_session(&args.data, &config, NormalizerConfig::overview())?;
    let records = session.records()?;
    let rows = summarize(records);

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(io::stdout(), &rows)?;
            println!();
        }
        OutputFormat::Plain => {
            let mut writer = TabWriter::new(io::stdout());
            writeln!(
                writer,
                "ALGORITHM\tHEURISTIC\tRUNS\tSUCCESS\tAVG NODES\tAVG TIME(MS)"
            )?;
            for row in &rows {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{:.1}%\t{:.1}\t{:.2}",
                    row.algorithm,
                    row.heuristic,
                    row.runs,
                    row.success_rate,
                    row.avg_nodes,
                    row.avg_time_ms,
                )?;
            }
            writer.flush()?;
            let successful: usize = records.iter().filter(|r| r.success).count();
            println!("\nTotal runs: {} ({} successful)", records.len(), successful);
        }
    }

    Ok(())
}
