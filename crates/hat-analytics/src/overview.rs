//! Overview-report analyses.
//!
//! Everything the overview dashboard derives from a filtered subset: headline
//! KPIs, the per-heuristic efficiency distribution, the memory-wall scatter,
//! failure rates per memory limit, the time-vs-space tradeoff, and the ML
//! bonus comparison over the full dataset.

use std::str::FromStr;

use hat_core::{heuristics, HatError, NormalizedRecord};
use serde::Serialize;

use crate::aggregate::CostDeviation;
use crate::sample::{stride_sample, MAX_CHART_POINTS};

/// Unbounded best-first search; the memory-hungry baseline.
pub const ASTAR: &str = "AStar";

/// Memory-bounded variant; the subject of the thrashing analyses.
pub const SMASTAR: &str = "SMAStar";

/// Fixed difficulty ordering for the ML bonus chart.
pub const DIFFICULTY_ORDER: [&str; 3] = ["EASY", "MEDIUM", "HARD"];

/// Chart metric selectable for the efficiency distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Nodes,
    Time,
    Cost,
}

impl Metric {
    pub fn axis_title(&self) -> &'static str {
        match self {
            Metric::Nodes => "Nodes Expanded",
            Metric::Time => "Time (ms)",
            Metric::Cost => "Path Cost",
        }
    }

    fn value(&self, record: &NormalizedRecord) -> Option<f64> {
        match self {
            Metric::Nodes => record.nodes_expanded,
            Metric::Time => Some(record.time_ms),
            Metric::Cost => record.cost,
        }
    }
}

impl FromStr for Metric {
    type Err = HatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nodes" => Ok(Metric::Nodes),
            "time" => Ok(Metric::Time),
            "cost" => Ok(Metric::Cost),
            other => Err(HatError::Validation(format!(
                "unknown metric {other:?} (expected nodes, time or cost)"
            ))),
        }
    }
}

/// Headline statistics over a filtered subset.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewKpis {
    pub total_runs: usize,
    /// Successful runs as a percentage of the subset.
    pub success_rate: f64,
    /// Mean wall-clock time over successful runs.
    pub mean_time_ms: f64,
    /// Successful runs whose cost exceeds the optimal cost by more than the
    /// fixed tolerance. Zero reads as fully optimal.
    pub sub_optimal_runs: usize,
}

/// KPIs over the subset; `None` when it is empty.
pub fn overview_kpis(rows: &[&NormalizedRecord]) -> Option<OverviewKpis> {
    if rows.is_empty() {
        return None;
    }
    let successful: Vec<&&NormalizedRecord> = rows.iter().filter(|r| r.success).collect();
    let mean_time_ms = if successful.is_empty() {
        0.0
    } else {
        successful.iter().map(|r| r.time_ms).sum::<f64>() / successful.len() as f64
    };
    let sub_optimal_runs = successful
        .iter()
        .filter(|r| r.is_optimal() == Some(false))
        .count();

    Some(OverviewKpis {
        total_runs: rows.len(),
        success_rate: successful.len() as f64 / rows.len() as f64 * 100.0,
        mean_time_ms,
        sub_optimal_runs,
    })
}

/// Metric values for one heuristic's box series.
#[derive(Debug, Clone, Serialize)]
pub struct HeuristicSeries {
    pub heuristic: String,
    pub values: Vec<f64>,
}

/// Per-heuristic distribution of the selected metric over successful runs,
/// heuristics in first-observed order.
pub fn heuristic_distribution(rows: &[&NormalizedRecord], metric: Metric) -> Vec<HeuristicSeries> {
    let mut series: Vec<HeuristicSeries> = Vec::new();
    for row in rows.iter().filter(|r| r.success) {
        let Some(value) = metric.value(row) else {
            continue;
        };
        match series.iter_mut().find(|s| s.heuristic == row.heuristic) {
            Some(existing) => existing.values.push(value),
            None => series.push(HeuristicSeries {
                heuristic: row.heuristic.clone(),
                values: vec![value],
            }),
        }
    }
    series
}

/// Scatter points for one heuristic in the memory-wall chart.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryWallSeries {
    pub heuristic: String,
    /// `(memory limit, pruned nodes)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Pruned-nodes vs memory-limit scatter over the memory-bounded algorithm's
/// rows, capped at [`MAX_CHART_POINTS`] by stride sampling.
pub fn memory_wall(rows: &[&NormalizedRecord]) -> Vec<MemoryWallSeries> {
    let sma: Vec<&NormalizedRecord> = rows
        .iter()
        .copied()
        .filter(|r| r.algorithm == SMASTAR)
        .collect();
    let plotted = stride_sample(&sma, MAX_CHART_POINTS);

    let mut series: Vec<MemoryWallSeries> = Vec::new();
    for row in plotted {
        let (Some(limit), Some(pruned)) = (row.mem_limit, row.pruned_nodes) else {
            continue;
        };
        match series.iter_mut().find(|s| s.heuristic == row.heuristic) {
            Some(existing) => existing.points.push((limit, pruned)),
            None => series.push(MemoryWallSeries {
                heuristic: row.heuristic.clone(),
                points: vec![(limit, pruned)],
            }),
        }
    }
    series
}

/// Failure rate for one finite memory limit.
#[derive(Debug, Clone, Serialize)]
pub struct FailureBucket {
    pub limit: f64,
    /// Failed runs as a percentage of the bucket.
    pub failure_rate: f64,
}

/// Failure rate per finite memory limit over the memory-bounded algorithm's
/// rows. The `Unlimited` bucket is excluded; buckets sort ascending by limit.
pub fn failure_rates(rows: &[&NormalizedRecord]) -> Vec<FailureBucket> {
    let mut buckets: Vec<(f64, usize, usize)> = Vec::new();
    for row in rows.iter().filter(|r| r.algorithm == SMASTAR) {
        let Some(label) = row.mem_limit_label.as_deref() else {
            continue;
        };
        if label == "Unlimited" {
            continue;
        }
        let Ok(limit) = label.parse::<f64>() else {
            continue;
        };
        if !limit.is_finite() {
            continue;
        }
        match buckets.iter_mut().find(|(l, _, _)| *l == limit) {
            Some((_, total, failures)) => {
                *total += 1;
                if !row.success {
                    *failures += 1;
                }
            }
            None => buckets.push((limit, 1, usize::from(!row.success))),
        }
    }

    buckets.sort_by(|a, b| a.0.total_cmp(&b.0));
    buckets
        .into_iter()
        .map(|(limit, total, failures)| FailureBucket {
            limit,
            failure_rate: failures as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// Scatter points for one algorithm in the time-vs-space tradeoff chart.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSeries {
    pub algorithm: String,
    /// `(memory used, time ms)` pairs.
    pub points: Vec<(f64, f64)>,
}

/// Memory-used vs time scatter over successful runs, one series per
/// algorithm, capped at [`MAX_CHART_POINTS`] by stride sampling.
pub fn time_space_tradeoff(rows: &[&NormalizedRecord]) -> Vec<AlgorithmSeries> {
    let successful: Vec<&NormalizedRecord> =
        rows.iter().copied().filter(|r| r.success).collect();
    let plotted = stride_sample(&successful, MAX_CHART_POINTS);

    [ASTAR, SMASTAR]
        .iter()
        .map(|algorithm| AlgorithmSeries {
            algorithm: algorithm.to_string(),
            points: plotted
                .iter()
                .filter(|r| r.algorithm == *algorithm)
                .filter_map(|r| Some((r.memory_used?, r.time_ms)))
                .collect(),
        })
        .collect()
}

/// One difficulty bucket of the ML bonus comparison.
#[derive(Debug, Clone, Serialize)]
pub struct DifficultyBucket {
    pub difficulty: String,
    pub reference_nodes: f64,
    pub candidate_nodes: f64,
}

/// Machine-learned vs standard comparison over the full dataset.
#[derive(Debug, Clone, Serialize)]
pub struct MlBonus {
    /// Standard heuristic the learned models are measured against.
    pub target_heuristic: String,
    /// Difficulty buckets populated on both sides, in [`DIFFICULTY_ORDER`].
    pub buckets: Vec<DifficultyBucket>,
    /// Mean-of-bucket-means work reduction; `None` when the reference mean
    /// is zero.
    pub effort_reduction: Option<f64>,
    /// Mean `|cost − optimal cost|` over the learned models' runs.
    pub cost_prediction_error: CostDeviation,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// ML bonus comparison over the full (unfiltered) dataset: successful
/// learned-heuristic runs of the unbounded algorithm vs the ground-truth
/// standard heuristic, grouped by difficulty. `None` when either side has no
/// successful rows at all.
pub fn ml_bonus(records: &[NormalizedRecord]) -> Option<MlBonus> {
    let ml_rows: Vec<&NormalizedRecord> = records
        .iter()
        .filter(|r| r.algorithm == ASTAR && r.success && heuristics::is_ml(&r.heuristic))
        .collect();
    if ml_rows.is_empty() {
        return None;
    }

    let standard_rows: Vec<&NormalizedRecord> = records
        .iter()
        .filter(|r| r.algorithm == ASTAR && r.success && !heuristics::is_ml(&r.heuristic))
        .collect();
    let target_heuristic = standard_rows
        .iter()
        .find(|r| r.heuristic == crate::index::GROUND_TRUTH_HEURISTIC)
        .or_else(|| standard_rows.first())
        .map(|r| r.heuristic.clone())?;
    let target_rows: Vec<&&NormalizedRecord> = standard_rows
        .iter()
        .filter(|r| r.heuristic == target_heuristic)
        .collect();

    let mut buckets = Vec::new();
    for difficulty in DIFFICULTY_ORDER {
        let ml_nodes: Vec<f64> = ml_rows
            .iter()
            .filter(|r| r.difficulty.as_deref() == Some(difficulty))
            .filter_map(|r| r.nodes_expanded)
            .collect();
        let std_nodes: Vec<f64> = target_rows
            .iter()
            .filter(|r| r.difficulty.as_deref() == Some(difficulty))
            .filter_map(|r| r.nodes_expanded)
            .collect();
        // A bar appears only when both sides solved instances at this
        // difficulty.
        if !ml_nodes.is_empty() && !std_nodes.is_empty() {
            buckets.push(DifficultyBucket {
                difficulty: difficulty.to_string(),
                reference_nodes: mean(&std_nodes),
                candidate_nodes: mean(&ml_nodes),
            });
        }
    }

    let reference_mean = mean(&buckets.iter().map(|b| b.reference_nodes).collect::<Vec<_>>());
    let candidate_mean = mean(&buckets.iter().map(|b| b.candidate_nodes).collect::<Vec<_>>());
    let effort_reduction = (reference_mean > 0.0)
        .then(|| (reference_mean - candidate_mean) / reference_mean * 100.0);

    let cost_errors: Vec<f64> = ml_rows
        .iter()
        .filter_map(|r| Some((r.cost? - r.optimal_cost?).abs()))
        .collect();
    let cost_prediction_error = CostDeviation::from_mean(mean(&cost_errors));

    Some(MlBonus {
        target_heuristic,
        buckets,
        effort_reduction,
        cost_prediction_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hat_core::{normalize, NormalizerConfig, RawRecord};

    fn raw(
        algorithm: &str,
        heuristic: &str,
        difficulty: &str,
        success: bool,
        nodes: f64,
    ) -> RawRecord {
        RawRecord {
            algorithm: Some(algorithm.to_string()),
            heuristic: Some(heuristic.to_string()),
            map_size: Some(10),
            difficulty: Some(difficulty.to_string()),
            cost: Some("10.0".to_string()),
            time_ns: Some(2_000_000),
            success: Some(success.to_string()),
            nodes_expanded: Some(nodes),
            pruned_nodes: Some(5.0),
            memory_used: Some(1024.0),
            memory_limit: Some(1000.0),
            optimal_cost: Some(10.0),
        }
    }

    fn refs(records: &[NormalizedRecord]) -> Vec<&NormalizedRecord> {
        records.iter().collect()
    }

    #[test]
    fn kpis_over_mixed_subset() {
        let rows = normalize(
            &[
                raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(ASTAR, "DIJKSTRA", "EASY", true, 120.0),
                raw(SMASTAR, "DIJKSTRA", "HARD", false, 900.0),
            ],
            &NormalizerConfig::overview(),
        );
        let kpis = overview_kpis(&refs(&rows)).unwrap();
        assert_eq!(kpis.total_runs, 3);
        assert!((kpis.success_rate - 66.66666666666667).abs() < 1e-9);
        assert!((kpis.mean_time_ms - 2.0).abs() < 1e-9);
        assert_eq!(kpis.sub_optimal_runs, 0);
    }

    #[test]
    fn kpis_count_sub_optimal_successes() {
        let mut sub_optimal = raw(ASTAR, "AVG_COST", "EASY", true, 100.0);
        sub_optimal.cost = Some("10.5".to_string());
        let rows = normalize(
            &[raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0), sub_optimal],
            &NormalizerConfig::overview(),
        );
        assert_eq!(overview_kpis(&refs(&rows)).unwrap().sub_optimal_runs, 1);
    }

    #[test]
    fn kpis_need_a_nonempty_subset() {
        assert!(overview_kpis(&[]).is_none());
    }

    #[test]
    fn distribution_uses_successful_rows_only() {
        let rows = normalize(
            &[
                raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(ASTAR, "DIJKSTRA", "EASY", false, 900.0),
                raw(ASTAR, "MLP", "EASY", true, 40.0),
            ],
            &NormalizerConfig::overview(),
        );
        let series = heuristic_distribution(&refs(&rows), Metric::Nodes);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].heuristic, "DIJKSTRA");
        assert_eq!(series[0].values, vec![100.0]);
        assert_eq!(series[1].values, vec![40.0]);
    }

    #[test]
    fn memory_wall_covers_only_the_bounded_algorithm() {
        let rows = normalize(
            &[
                raw(SMASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0),
            ],
            &NormalizerConfig::overview(),
        );
        let series = memory_wall(&refs(&rows));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![(1000.0, 5.0)]);
    }

    #[test]
    fn failure_buckets_exclude_unlimited_and_sort_ascending() {
        let mut unlimited = raw(SMASTAR, "DIJKSTRA", "EASY", false, 100.0);
        unlimited.memory_limit = Some(-1.0);
        let mut large = raw(SMASTAR, "DIJKSTRA", "EASY", false, 100.0);
        large.memory_limit = Some(5000.0);
        let rows = normalize(
            &[
                raw(SMASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(SMASTAR, "DIJKSTRA", "EASY", false, 100.0),
                large,
                unlimited,
            ],
            &NormalizerConfig::overview(),
        );
        let buckets = failure_rates(&refs(&rows));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].limit, 1000.0);
        assert!((buckets[0].failure_rate - 50.0).abs() < 1e-9);
        assert_eq!(buckets[1].limit, 5000.0);
        assert_eq!(buckets[1].failure_rate, 100.0);
    }

    #[test]
    fn tradeoff_splits_successful_rows_by_algorithm() {
        let rows = normalize(
            &[
                raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(SMASTAR, "DIJKSTRA", "EASY", true, 100.0),
                raw(SMASTAR, "DIJKSTRA", "EASY", false, 100.0),
            ],
            &NormalizerConfig::overview(),
        );
        let series = time_space_tradeoff(&refs(&rows));
        assert_eq!(series[0].algorithm, ASTAR);
        assert_eq!(series[0].points.len(), 1);
        assert_eq!(series[1].algorithm, SMASTAR);
        assert_eq!(series[1].points.len(), 1);
    }

    #[test]
    fn ml_bonus_pairs_difficulties_populated_on_both_sides() {
        let rows = normalize(
            &[
                raw(ASTAR, "MLP", "EASY", true, 60.0),
                raw(ASTAR, "MLP", "HARD", true, 400.0),
                raw(ASTAR, "SCALED_MANHATTAN", "EASY", true, 100.0),
                // MEDIUM exists only on the standard side; no bucket.
                raw(ASTAR, "SCALED_MANHATTAN", "MEDIUM", true, 200.0),
                raw(ASTAR, "SCALED_MANHATTAN", "HARD", true, 500.0),
            ],
            &NormalizerConfig::overview(),
        );
        let bonus = ml_bonus(&rows).unwrap();
        assert_eq!(bonus.target_heuristic, "SCALED_MANHATTAN");
        let difficulties: Vec<&str> =
            bonus.buckets.iter().map(|b| b.difficulty.as_str()).collect();
        assert_eq!(difficulties, vec!["EASY", "HARD"]);
        // Bucket means: reference (100 + 500) / 2, candidate (60 + 400) / 2.
        assert!(bonus.effort_reduction.unwrap() > 0.0);
        assert_eq!(bonus.cost_prediction_error, CostDeviation::Optimal);
    }

    #[test]
    fn ml_bonus_requires_successful_ml_rows() {
        let rows = normalize(
            &[
                raw(ASTAR, "MLP", "EASY", false, 60.0),
                raw(ASTAR, "SCALED_MANHATTAN", "EASY", true, 100.0),
            ],
            &NormalizerConfig::overview(),
        );
        assert!(ml_bonus(&rows).is_none());
    }

    #[test]
    fn ml_bonus_falls_back_to_first_standard_heuristic() {
        let rows = normalize(
            &[
                raw(ASTAR, "MLP", "EASY", true, 60.0),
                raw(ASTAR, "DIJKSTRA", "EASY", true, 100.0),
            ],
            &NormalizerConfig::overview(),
        );
        assert_eq!(ml_bonus(&rows).unwrap().target_heuristic, "DIJKSTRA");
    }

    #[test]
    fn metric_parses_from_cli_tokens() {
        assert_eq!("nodes".parse::<Metric>().unwrap(), Metric::Nodes);
        assert_eq!("time".parse::<Metric>().unwrap(), Metric::Time);
        assert!("speed".parse::<Metric>().is_err());
    }
}
