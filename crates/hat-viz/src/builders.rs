//! Builders for every dashboard chart.
//!
//! Each builder turns `hat-analytics` output into one [`ChartSpec`]. Target
//! ids are stable; the renderer maps them to page elements.

use hat_analytics::{
    AlgorithmSeries, ComparisonRecord, FailureBucket, HeuristicSeries, MemoryWallSeries, Metric,
    MlBonus, MlReport,
};

use crate::spec::{AxisOptions, BarMode, ChartSpec, LayoutOptions, Series, Theme};

/// Standard-heuristic series colour.
pub const STANDARD_COLOR: &str = "#3b82f6";
/// Machine-learned series colour.
pub const ML_COLOR: &str = "#8b5cf6";
/// Candidate time-series colour.
pub const TIME_COLOR: &str = "#f59e0b";
/// Failure bar colour above the switch threshold.
pub const FAILURE_HIGH_COLOR: &str = "#ef4444";
/// Failure bar colour below the switch threshold.
pub const FAILURE_WARN_COLOR: &str = "#f59e0b";
/// Failure-rate percentage at which bars switch colour.
pub const FAILURE_COLOR_SWITCH: f64 = 50.0;

fn grouped_bars(
    target_id: &str,
    pairs: &[ComparisonRecord],
    reference_name: &str,
    candidate_name: &str,
    candidate_color: &str,
    y_title: &str,
    value: impl Fn(&ComparisonRecord) -> (f64, f64),
    theme: Theme,
) -> ChartSpec {
    let labels: Vec<String> = pairs.iter().map(|p| p.label.clone()).collect();
    let (reference_y, candidate_y): (Vec<f64>, Vec<f64>) = pairs.iter().map(value).unzip();

    let mut layout = LayoutOptions::for_theme(theme);
    layout.bar_mode = Some(BarMode::Group);
    layout.y_axis = AxisOptions::titled(y_title);

    ChartSpec {
        target_id: target_id.to_string(),
        series: vec![
            Series::bar(reference_name, labels.clone(), reference_y, STANDARD_COLOR),
            Series::bar(candidate_name, labels, candidate_y, candidate_color),
        ],
        layout,
    }
}

/// Grouped bars of mean nodes expanded per comparison group.
pub fn ml_efficiency(report: &MlReport, theme: Theme) -> ChartSpec {
    grouped_bars(
        "ml_efficiency",
        &report.pairs,
        &report.target_heuristic,
        &report.candidate_label(),
        ML_COLOR,
        "Avg Nodes Expanded",
        |p| (p.reference.nodes, p.candidate.nodes),
        theme,
    )
}

/// Box plot of per-run nodes expanded for both series, log y.
pub fn ml_distribution(report: &MlReport, theme: Theme) -> ChartSpec {
    let mut layout = LayoutOptions::for_theme(theme);
    layout.y_axis = AxisOptions::titled("Nodes Expanded (Log Scale)");
    layout.y_axis.log_scale = true;

    ChartSpec {
        target_id: "ml_distribution".to_string(),
        series: vec![
            Series::boxed(
                &report.target_heuristic,
                report
                    .reference_success
                    .iter()
                    .filter_map(|r| r.nodes_expanded)
                    .collect(),
                Some(STANDARD_COLOR),
            ),
            Series::boxed(
                report.candidate_label(),
                report
                    .candidate_success
                    .iter()
                    .filter_map(|r| r.nodes_expanded)
                    .collect(),
                Some(ML_COLOR),
            ),
        ],
        layout,
    }
}

/// Grouped bars of mean time per comparison group.
pub fn ml_time(report: &MlReport, theme: Theme) -> ChartSpec {
    grouped_bars(
        "ml_time",
        &report.pairs,
        &report.target_heuristic,
        &report.candidate_label(),
        TIME_COLOR,
        "Avg Time (ms)",
        |p| (p.reference.time_ms, p.candidate.time_ms),
        theme,
    )
}

/// Box plot of the selected metric per heuristic, successful runs only.
pub fn heuristic_efficiency(
    series: &[HeuristicSeries],
    metric: Metric,
    theme: Theme,
) -> ChartSpec {
    let mut layout = LayoutOptions::for_theme(theme);
    layout.y_axis = AxisOptions::titled(metric.axis_title());

    ChartSpec {
        target_id: "heuristic_efficiency".to_string(),
        series: series
            .iter()
            .map(|s| Series::boxed(&s.heuristic, s.values.clone(), None))
            .collect(),
        layout,
    }
}

/// Pruned-nodes vs memory-limit scatter, reversed x axis.
pub fn memory_wall(series: &[MemoryWallSeries], theme: Theme) -> ChartSpec {
    let mut layout = LayoutOptions::for_theme(theme);
    layout.x_axis = AxisOptions::titled("Memory Limit");
    layout.x_axis.reversed = true;
    layout.y_axis = AxisOptions::titled("Pruned Nodes");

    ChartSpec {
        target_id: "memory_wall".to_string(),
        series: series
            .iter()
            .map(|s| {
                let (x, y) = s.points.iter().copied().unzip();
                Series::scatter(&s.heuristic, x, y)
            })
            .collect(),
        layout,
    }
}

/// Failure-rate bars per finite memory limit, colour switching at 50 %.
pub fn failure_rates(buckets: &[FailureBucket], theme: Theme) -> ChartSpec {
    let labels: Vec<String> = buckets.iter().map(|b| b.limit.to_string()).collect();
    let rates: Vec<f64> = buckets.iter().map(|b| b.failure_rate).collect();
    let colors: Vec<String> = rates
        .iter()
        .map(|rate| {
            if *rate > FAILURE_COLOR_SWITCH {
                FAILURE_HIGH_COLOR.to_string()
            } else {
                FAILURE_WARN_COLOR.to_string()
            }
        })
        .collect();

    let mut bars = Series::bar("Failure Rate", labels, rates, FAILURE_WARN_COLOR);
    bars.color = None;
    bars.point_colors = Some(colors);

    let mut layout = LayoutOptions::for_theme(theme);
    layout.y_axis = AxisOptions::titled("Failure Rate %");

    ChartSpec {
        target_id: "failure_rates".to_string(),
        series: vec![bars],
        layout,
    }
}

/// Memory-used vs time scatter per algorithm, log x.
pub fn time_space_tradeoff(series: &[AlgorithmSeries], theme: Theme) -> ChartSpec {
    let mut layout = LayoutOptions::for_theme(theme);
    layout.x_axis = AxisOptions::titled("Memory (Log Scale)");
    layout.x_axis.log_scale = true;
    layout.y_axis = AxisOptions::titled("Time (ms)");

    ChartSpec {
        target_id: "time_space_tradeoff".to_string(),
        series: series
            .iter()
            .map(|s| {
                let (x, y) = s.points.iter().copied().unzip();
                Series::scatter(&s.algorithm, x, y)
            })
            .collect(),
        layout,
    }
}

/// Grouped bars of mean nodes per difficulty: learned models vs the
/// ground-truth standard heuristic.
pub fn ml_bonus(bonus: &MlBonus, theme: Theme) -> ChartSpec {
    let labels: Vec<String> = bonus.buckets.iter().map(|b| b.difficulty.clone()).collect();

    let mut layout = LayoutOptions::for_theme(theme);
    layout.bar_mode = Some(BarMode::Group);
    layout.y_axis = AxisOptions::titled("Nodes Expanded (Success Only)");

    ChartSpec {
        target_id: "ml_bonus".to_string(),
        series: vec![
            Series::bar(
                format!("Standard ({})", bonus.target_heuristic),
                labels.clone(),
                bonus.buckets.iter().map(|b| b.reference_nodes).collect(),
                STANDARD_COLOR,
            ),
            Series::bar(
                "AI (All ML Models)",
                labels,
                bonus.buckets.iter().map(|b| b.candidate_nodes).collect(),
                ML_COLOR,
            ),
        ],
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hat_analytics::{ml_report, CostDeviation, DifficultyBucket, FilterSelection, Selection};
    use hat_core::{normalize, NormalizerConfig, RawRecord};

    fn raw(heuristic: &str, success: bool, nodes: f64) -> RawRecord {
        RawRecord {
            algorithm: Some("AStar".to_string()),
            heuristic: Some(heuristic.to_string()),
            map_size: Some(10),
            difficulty: Some("EASY".to_string()),
            cost: Some("12.0".to_string()),
            time_ns: Some(1_000_000),
            success: Some(success.to_string()),
            nodes_expanded: Some(nodes),
            ..RawRecord::default()
        }
    }

    fn report() -> MlReport {
        let records = normalize(
            &[
                raw("MLP", true, 60.0),
                raw("SCALED_MANHATTAN", true, 100.0),
            ],
            &NormalizerConfig::ml_report(),
        );
        ml_report(
            &records,
            &FilterSelection::default(),
            &Selection::Value("MLP".to_string()),
            "SCALED_MANHATTAN",
        )
        .unwrap()
    }

    #[test]
    fn efficiency_chart_pairs_reference_and_candidate() {
        let spec = ml_efficiency(&report(), Theme::Dark);
        assert_eq!(spec.target_id, "ml_efficiency");
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].name, "SCALED_MANHATTAN");
        assert_eq!(spec.series[0].y, vec![100.0]);
        assert_eq!(spec.series[1].name, "AI (MLP)");
        assert_eq!(spec.series[1].y, vec![60.0]);
        assert_eq!(spec.series[1].color.as_deref(), Some(ML_COLOR));
    }

    #[test]
    fn distribution_chart_uses_log_axis() {
        let spec = ml_distribution(&report(), Theme::Light);
        assert!(spec.layout.y_axis.log_scale);
        assert_eq!(spec.series[1].y, vec![60.0]);
    }

    #[test]
    fn time_chart_colours_candidate_amber() {
        let spec = ml_time(&report(), Theme::Dark);
        assert_eq!(spec.series[1].color.as_deref(), Some(TIME_COLOR));
    }

    #[test]
    fn failure_bars_switch_colour_at_threshold() {
        let buckets = vec![
            FailureBucket {
                limit: 1000.0,
                failure_rate: 20.0,
            },
            FailureBucket {
                limit: 500.0,
                failure_rate: 80.0,
            },
        ];
        let spec = failure_rates(&buckets, Theme::Dark);
        let colors = spec.series[0].point_colors.as_ref().unwrap();
        assert_eq!(colors[0], FAILURE_WARN_COLOR);
        assert_eq!(colors[1], FAILURE_HIGH_COLOR);
    }

    #[test]
    fn bonus_chart_labels_by_difficulty() {
        let bonus = MlBonus {
            target_heuristic: "SCALED_MANHATTAN".to_string(),
            buckets: vec![DifficultyBucket {
                difficulty: "EASY".to_string(),
                reference_nodes: 100.0,
                candidate_nodes: 60.0,
            }],
            effort_reduction: Some(40.0),
            cost_prediction_error: CostDeviation::Optimal,
        };
        let spec = ml_bonus(&bonus, Theme::Dark);
        assert_eq!(
            spec.series[0].x,
            Some(crate::spec::SeriesX::Labels(vec!["EASY".to_string()]))
        );
        assert_eq!(spec.series[0].name, "Standard (SCALED_MANHATTAN)");
    }

    #[test]
    fn tradeoff_chart_is_log_x_scatter() {
        let series = vec![AlgorithmSeries {
            algorithm: "AStar".to_string(),
            points: vec![(1024.0, 1.5)],
        }];
        let spec = time_space_tradeoff(&series, Theme::Dark);
        assert!(spec.layout.x_axis.log_scale);
        assert_eq!(spec.series[0].kind, crate::spec::RenderKind::Scatter);
    }
}
