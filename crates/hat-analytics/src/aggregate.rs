//! Group-by aggregation over paired row subsets.
//!
//! Partitions a reference subset and a candidate subset by a grouping key and
//! emits one [`ComparisonRecord`] per key populated on both sides. Keys
//! present in only one partition are dropped: a fair comparison needs solved
//! instances from both series in that bucket.

use std::collections::BTreeMap;
use std::fmt;

use hat_core::NormalizedRecord;
use serde::Serialize;

/// Mean absolute cost difference below which a comparison is reported as
/// optimal instead of a numeric deviation.
pub const OPTIMAL_DEVIATION_THRESHOLD: f64 = 0.5;

/// Grouping dimension for paired comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Composite `{MapSize}-{Difficulty}` key.
    SizeDifficulty,
    /// Difficulty name alone.
    Difficulty,
}

impl GroupBy {
    /// Grouping key for one record; `None` when a grouping dimension is
    /// absent, which leaves the record out of the aggregation.
    fn key(&self, record: &NormalizedRecord) -> Option<String> {
        match self {
            GroupBy::SizeDifficulty => {
                let size = record.map_size?;
                let difficulty = record.difficulty.as_deref()?;
                Some(format!("{size}-{difficulty}"))
            }
            GroupBy::Difficulty => record.difficulty.clone(),
        }
    }
}

/// Arithmetic means of the target numeric fields over one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesMeans {
    pub nodes: f64,
    pub time_ms: f64,
    pub cost: f64,
}

/// One comparable group: reference-series vs candidate-series means.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRecord {
    pub label: String,
    pub reference: SeriesMeans,
    pub candidate: SeriesMeans,
}

/// Derived statistics over a set of comparison records.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonStats {
    /// Percentage of groups where the candidate expanded fewer nodes.
    pub win_rate: f64,
    /// `(Σref.nodes − Σcand.nodes) / Σref.nodes × 100`; positive means the
    /// candidate did less work. Zero when the denominator is zero.
    pub work_reduction: f64,
    /// Mean per-group `candidate.time − reference.time`; positive means the
    /// candidate is slower.
    pub time_overhead_ms: f64,
    /// Mean per-group `|candidate.cost − reference.cost|`.
    pub cost_deviation: CostDeviation,
}

/// Mean absolute cost difference, reported as "Optimal" below the fixed
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CostDeviation {
    Optimal,
    Deviation(f64),
}

impl CostDeviation {
    pub fn from_mean(mean_abs_diff: f64) -> Self {
        if mean_abs_diff < OPTIMAL_DEVIATION_THRESHOLD {
            CostDeviation::Optimal
        } else {
            CostDeviation::Deviation(mean_abs_diff)
        }
    }
}

impl fmt::Display for CostDeviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostDeviation::Optimal => f.write_str("Optimal"),
            CostDeviation::Deviation(value) => write!(f, "{value:+.2}"),
        }
    }
}

fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn series_means(rows: &[&NormalizedRecord]) -> SeriesMeans {
    SeriesMeans {
        nodes: mean(rows.iter().filter_map(|r| r.nodes_expanded)),
        time_ms: mean(rows.iter().map(|r| r.time_ms)),
        cost: mean(rows.iter().filter_map(|r| r.cost)),
    }
}

fn partition<'a>(
    rows: &[&'a NormalizedRecord],
    group_by: GroupBy,
) -> BTreeMap<String, Vec<&'a NormalizedRecord>> {
    let mut groups: BTreeMap<String, Vec<&NormalizedRecord>> = BTreeMap::new();
    for row in rows {
        if let Some(key) = group_by.key(row) {
            groups.entry(key).or_default().push(row);
        }
    }
    groups
}

/// Partition both subsets by `group_by` and emit one record per key that has
/// at least one row on each side, with per-series means of nodes expanded,
/// time and cost.
pub fn aggregate(
    reference: &[&NormalizedRecord],
    candidate: &[&NormalizedRecord],
    group_by: GroupBy,
) -> Vec<ComparisonRecord> {
    let reference_groups = partition(reference, group_by);
    let candidate_groups = partition(candidate, group_by);

    reference_groups
        .iter()
        .filter_map(|(key, reference_rows)| {
            let candidate_rows = candidate_groups.get(key)?;
            Some(ComparisonRecord {
                label: key.clone(),
                reference: series_means(reference_rows),
                candidate: series_means(candidate_rows),
            })
        })
        .collect()
}

/// Derived KPIs over the comparison records. `None` when there is nothing to
/// compare.
pub fn comparison_stats(records: &[ComparisonRecord]) -> Option<ComparisonStats> {
    if records.is_empty() {
        return None;
    }

    let wins = records
        .iter()
        .filter(|r| r.candidate.nodes < r.reference.nodes)
        .count();
    let win_rate = wins as f64 / records.len() as f64 * 100.0;

    let total_reference: f64 = records.iter().map(|r| r.reference.nodes).sum();
    let total_candidate: f64 = records.iter().map(|r| r.candidate.nodes).sum();
    let work_reduction = if total_reference > 0.0 {
        (total_reference - total_candidate) / total_reference * 100.0
    } else {
        0.0
    };

    let time_overhead_ms = mean(records.iter().map(|r| r.candidate.time_ms - r.reference.time_ms));
    let cost_deviation =
        CostDeviation::from_mean(mean(records.iter().map(|r| (r.candidate.cost - r.reference.cost).abs())));

    Some(ComparisonStats {
        win_rate,
        work_reduction,
        time_overhead_ms,
        cost_deviation,
    })
}
