//! Machine-learned heuristic comparison report.
//!
//! Selects the candidate (learned model) and reference (standard heuristic)
//! subsets from an already-filtered dataset, pairs them per map-size and
//! difficulty group, and derives the headline statistics. Only successful
//! runs enter the grouping; the model success rate is measured over every
//! run of the selected model.

use hat_core::{heuristics, NormalizedRecord};
use serde::Serialize;

use crate::aggregate::{aggregate, comparison_stats, ComparisonRecord, ComparisonStats, GroupBy};
use crate::query::{filter, FilterSelection, Selection};

/// Output of the ML comparison pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct MlReport {
    /// Selected model, or the wildcard meaning every learned model combined.
    pub model: Selection,
    /// Standard heuristic the candidate is measured against.
    pub target_heuristic: String,
    /// Successful candidate runs as a percentage of all candidate runs.
    pub success_rate: f64,
    /// Per-group comparison pairs (successful runs only).
    pub pairs: Vec<ComparisonRecord>,
    /// Derived KPIs; `None` when no group is populated on both sides.
    pub stats: Option<ComparisonStats>,
    /// Successful reference rows, for distribution charts.
    pub reference_success: Vec<NormalizedRecord>,
    /// Successful candidate rows, for distribution charts.
    pub candidate_success: Vec<NormalizedRecord>,
}

impl MlReport {
    /// Display name for the candidate series.
    pub fn candidate_label(&self) -> String {
        match &self.model {
            Selection::All => "AI (All Models)".to_string(),
            Selection::Value(model) => format!("AI ({model})"),
        }
    }
}

/// Build the ML comparison report over `records` restricted by `selection`.
///
/// `model` narrows the candidate side to one learned model; the wildcard
/// aggregates every learned heuristic. Returns `None` when either side has
/// no rows at all under the current filters.
pub fn ml_report(
    records: &[NormalizedRecord],
    selection: &FilterSelection,
    model: &Selection,
    target_heuristic: &str,
) -> Option<MlReport> {
    let filtered = filter(records, selection);

    let candidate_all: Vec<&NormalizedRecord> = filtered
        .iter()
        .copied()
        .filter(|r| match model {
            Selection::All => heuristics::is_ml(&r.heuristic),
            Selection::Value(name) => r.heuristic == *name,
        })
        .collect();
    let reference_all: Vec<&NormalizedRecord> = filtered
        .iter()
        .copied()
        .filter(|r| r.heuristic == target_heuristic)
        .collect();

    if candidate_all.is_empty() || reference_all.is_empty() {
        return None;
    }

    let candidate_success: Vec<&NormalizedRecord> =
        candidate_all.iter().copied().filter(|r| r.success).collect();
    let reference_success: Vec<&NormalizedRecord> =
        reference_all.iter().copied().filter(|r| r.success).collect();

    let success_rate = candidate_success.len() as f64 / candidate_all.len() as f64 * 100.0;

    let pairs = aggregate(&reference_success, &candidate_success, GroupBy::SizeDifficulty);
    let stats = comparison_stats(&pairs);

    Some(MlReport {
        model: model.clone(),
        target_heuristic: target_heuristic.to_string(),
        success_rate,
        pairs,
        stats,
        reference_success: reference_success.into_iter().cloned().collect(),
        candidate_success: candidate_success.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hat_core::{normalize, NormalizerConfig, RawRecord};

    fn raw(heuristic: &str, size: u32, difficulty: &str, success: bool, nodes: f64) -> RawRecord {
        RawRecord {
            algorithm: Some("AStar".to_string()),
            heuristic: Some(heuristic.to_string()),
            map_size: Some(size),
            difficulty: Some(difficulty.to_string()),
            cost: Some("12.0".to_string()),
            time_ns: Some(1_500_000),
            success: Some(success.to_string()),
            nodes_expanded: Some(nodes),
            ..RawRecord::default()
        }
    }

    fn dataset() -> Vec<NormalizedRecord> {
        normalize(
            &[
                raw("MLP", 10, "EASY", true, 60.0),
                raw("MLP", 10, "EASY", false, 0.0),
                raw("Ridge", 10, "EASY", true, 70.0),
                raw("SCALED_MANHATTAN", 10, "EASY", true, 100.0),
                raw("SCALED_MANHATTAN", 20, "HARD", true, 400.0),
            ],
            &NormalizerConfig::ml_report(),
        )
    }

    #[test]
    fn single_model_comparison() {
        let records = dataset();
        let report = ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::Value("MLP".to_string()),
            "SCALED_MANHATTAN",
        )
        .unwrap();

        // One of the two MLP runs succeeded.
        assert!((report.success_rate - 50.0).abs() < 1e-9);
        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.pairs[0].label, "10-EASY");
        assert_eq!(report.pairs[0].candidate.nodes, 60.0);
        assert_eq!(report.candidate_label(), "AI (MLP)");
        assert!(report.stats.is_some());
    }

    #[test]
    fn wildcard_model_aggregates_every_learned_heuristic() {
        let records = dataset();
        let report = ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::All,
            "SCALED_MANHATTAN",
        )
        .unwrap();

        // MLP (success + failure) and Ridge (success).
        assert!((report.success_rate - 66.66666666666667).abs() < 1e-9);
        // Group mean over both successful candidate rows: (60 + 70) / 2.
        assert_eq!(report.pairs[0].candidate.nodes, 65.0);
        assert_eq!(report.candidate_label(), "AI (All Models)");
    }

    #[test]
    fn missing_side_yields_no_report() {
        let records = dataset();
        assert!(ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::Value("ElasticNet".to_string()),
            "SCALED_MANHATTAN",
        )
        .is_none());
        assert!(ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::All,
            "DIJKSTRA",
        )
        .is_none());
    }

    #[test]
    fn disjoint_groups_leave_stats_empty() {
        let records = normalize(
            &[
                raw("MLP", 10, "EASY", true, 60.0),
                raw("SCALED_MANHATTAN", 20, "HARD", true, 400.0),
            ],
            &NormalizerConfig::ml_report(),
        );
        let report = ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::All,
            "SCALED_MANHATTAN",
        )
        .unwrap();
        assert!(report.pairs.is_empty());
        assert!(report.stats.is_none());
    }

    #[test]
    fn filters_restrict_both_sides() {
        let records = dataset();
        let selection = FilterSelection::from_args(None, Some("HARD"), None);
        // HARD has standard rows but no ML rows.
        assert!(ml_report(
            &records,
            &selection,
            &Selection::All,
            "SCALED_MANHATTAN",
        )
        .is_none());
    }
}
