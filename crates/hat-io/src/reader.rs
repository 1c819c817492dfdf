//! Tolerant CSV parsing for benchmark results.
//!
//! Uses header-mapped field extraction (not serde Deserialize) so that rows
//! shorter than the header and files missing optional columns are handled
//! gracefully — absent fields surface as `None` on the [`RawRecord`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use hat_core::RawRecord;

/// Build a column-name-to-index map from the CSV header.
fn header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_string(), i))
        .collect()
}

/// Get a string field from a record by header name. `None` if missing or empty.
fn get_str<'a>(
    record: &'a csv::StringRecord,
    hmap: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    hmap.get(name)
        .and_then(|&i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn get_string(
    record: &csv::StringRecord,
    hmap: &HashMap<String, usize>,
    name: &str,
) -> Option<String> {
    // Keep the raw field (whitespace included) for columns the normalizer
    // trims itself; an all-whitespace field still counts as absent.
    hmap.get(name)
        .and_then(|&i| record.get(i))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Get a float field. `None` if missing, empty, or unparseable.
fn get_f64(record: &csv::StringRecord, hmap: &HashMap<String, usize>, name: &str) -> Option<f64> {
    get_str(record, hmap, name).and_then(|s| s.parse().ok())
}

/// Get an unsigned integer field. `None` if missing, empty, or unparseable.
fn get_u64(record: &csv::StringRecord, hmap: &HashMap<String, usize>, name: &str) -> Option<u64> {
    get_str(record, hmap, name).and_then(|s| s.parse().ok())
}

fn get_u32(record: &csv::StringRecord, hmap: &HashMap<String, usize>, name: &str) -> Option<u32> {
    get_str(record, hmap, name).and_then(|s| s.parse().ok())
}

/// Parse a single CSV record into a RawRecord.
fn parse_row(record: &csv::StringRecord, hmap: &HashMap<String, usize>) -> RawRecord {
    RawRecord {
        algorithm: get_str(record, hmap, "Algorithm").map(str::to_string),
        heuristic: get_string(record, hmap, "Heuristic"),
        map_size: get_u32(record, hmap, "MapSize"),
        difficulty: get_str(record, hmap, "Difficulty").map(str::to_string),
        cost: get_str(record, hmap, "Cost").map(str::to_string),
        time_ns: get_u64(record, hmap, "Time_ns"),
        success: get_str(record, hmap, "Success").map(str::to_string),
        nodes_expanded: get_f64(record, hmap, "NodesExpanded"),
        pruned_nodes: get_f64(record, hmap, "PrunedNodes"),
        memory_used: get_f64(record, hmap, "MemoryUsed"),
        memory_limit: get_f64(record, hmap, "MemoryLimit"),
        optimal_cost: get_f64(record, hmap, "OptimalCost"),
    }
}

/// Read benchmark rows from any reader. The header row is required; blank
/// lines and short rows are tolerated.
pub fn read_raw_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let hmap = header_map(csv_reader.headers().context("reading CSV header")?);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("reading CSV record")?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(parse_row(&record, &hmap));
    }
    Ok(rows)
}

/// Read benchmark rows from a file on disk.
pub fn read_raw_records_from_path(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open benchmark CSV: {}", path.display()))?;
    read_raw_records(file)
}
