//! Row-level field derivation.
//!
//! Maps [`RawRecord`]s into [`NormalizedRecord`]s: unit conversion, boolean
//! coercion, heuristic-name trimming and sentinel substitution for the
//! infinite-cost and unlimited-memory markers. The mapping is pure and total
//! except that rows without an `Algorithm` value are dropped, and an
//! optional algorithm retention filter keeps only one algorithm's rows.

use serde::{Deserialize, Serialize};

use crate::record::{NormalizedRecord, RawRecord};

/// Finite stand-in for an infinite path cost under the sentinel policy.
pub const INFINITE_COST_SENTINEL: f64 = 999_999.0;

/// Stand-in for the `-1` unlimited-memory marker.
pub const UNLIMITED_MEMORY_SENTINEL: f64 = 1_000_000_000.0;

/// How an infinite `Cost` token is represented after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfiniteCostPolicy {
    /// Replace with a fixed large finite value.
    Sentinel(f64),
    /// Drop the value; the cost becomes absent.
    Absent,
}

/// Normalizer configuration. The two report pipelines share one normalizer
/// and differ only in this value.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub infinite_cost: InfiniteCostPolicy,
    /// When set, retain only rows whose trimmed `Algorithm` equals this name.
    pub algorithm: Option<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            infinite_cost: InfiniteCostPolicy::Absent,
            algorithm: None,
        }
    }
}

impl NormalizerConfig {
    /// Configuration for the overview report: infinite costs become absent,
    /// all algorithms are retained.
    pub fn overview() -> Self {
        Self::default()
    }

    /// Configuration for the ML comparison report: infinite costs become a
    /// finite sentinel and only `AStar` rows are retained.
    pub fn ml_report() -> Self {
        Self {
            infinite_cost: InfiniteCostPolicy::Sentinel(INFINITE_COST_SENTINEL),
            algorithm: Some("AStar".to_string()),
        }
    }
}

/// Derive normalized records from raw rows. One output per retained input.
pub fn normalize(rows: &[RawRecord], config: &NormalizerConfig) -> Vec<NormalizedRecord> {
    rows.iter()
        .filter_map(|row| normalize_row(row, config))
        .collect()
}

fn normalize_row(row: &RawRecord, config: &NormalizerConfig) -> Option<NormalizedRecord> {
    let algorithm = row.algorithm.as_deref().filter(|a| !a.is_empty())?;
    if let Some(wanted) = &config.algorithm {
        if algorithm.trim() != wanted {
            return None;
        }
    }

    let (mem_limit, mem_limit_label) = match row.memory_limit {
        Some(limit) if limit == -1.0 => {
            (Some(UNLIMITED_MEMORY_SENTINEL), Some("Unlimited".to_string()))
        }
        Some(limit) => (Some(limit), Some(format_limit(limit))),
        None => (None, None),
    };

    Some(NormalizedRecord {
        algorithm: algorithm.to_string(),
        heuristic: row
            .heuristic
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or("Unknown")
            .to_string(),
        map_size: row.map_size,
        difficulty: row.difficulty.clone(),
        cost: parse_cost(row.cost.as_deref(), config.infinite_cost),
        time_ms: row.time_ns.unwrap_or(0) as f64 / 1_000_000.0,
        success: coerce_success(row.success.as_deref()),
        nodes_expanded: row.nodes_expanded,
        pruned_nodes: row.pruned_nodes,
        memory_used: row.memory_used,
        mem_limit,
        mem_limit_label,
        optimal_cost: row.optimal_cost,
    })
}

/// Parse a raw cost token, applying the infinite-cost policy.
/// Unparseable tokens become absent.
fn parse_cost(raw: Option<&str>, policy: InfiniteCostPolicy) -> Option<f64> {
    let token = raw?.trim();
    if token == "Infinity" {
        return match policy {
            InfiniteCostPolicy::Sentinel(value) => Some(value),
            InfiniteCostPolicy::Absent => None,
        };
    }
    token.parse::<f64>().ok().filter(|c| c.is_finite())
}

/// Coercion contract: lowercase the value's string representation and
/// compare for equality with `"true"`. Anything else (including `1`) is
/// false; an absent value is false.
fn coerce_success(raw: Option<&str>) -> bool {
    raw.is_some_and(|s| s.trim().eq_ignore_ascii_case("true"))
}

fn format_limit(limit: f64) -> String {
    if limit.fract() == 0.0 {
        format!("{}", limit as i64)
    } else {
        format!("{limit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(algorithm: &str) -> RawRecord {
        RawRecord {
            algorithm: Some(algorithm.to_string()),
            heuristic: Some("  SCALED_MANHATTAN ".to_string()),
            map_size: Some(10),
            difficulty: Some("EASY".to_string()),
            cost: Some("12.5".to_string()),
            time_ns: Some(3_500_000),
            success: Some("true".to_string()),
            nodes_expanded: Some(120.0),
            pruned_nodes: Some(0.0),
            memory_used: Some(4096.0),
            memory_limit: Some(-1.0),
            optimal_cost: Some(12.5),
        }
    }

    #[test]
    fn one_output_per_retained_input() {
        let rows = vec![raw("AStar"), raw("SMAStar")];
        assert_eq!(normalize(&rows, &NormalizerConfig::overview()).len(), 2);
    }

    #[test]
    fn missing_algorithm_is_dropped() {
        let mut row = raw("AStar");
        row.algorithm = None;
        assert!(normalize(&[row.clone()], &NormalizerConfig::overview()).is_empty());
        row.algorithm = Some(String::new());
        assert!(normalize(&[row], &NormalizerConfig::overview()).is_empty());
    }

    #[test]
    fn algorithm_filter_retains_only_matches() {
        let rows = vec![raw("AStar"), raw("SMAStar"), raw(" AStar ")];
        let out = normalize(&rows, &NormalizerConfig::ml_report());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.algorithm.trim() == "AStar"));
    }

    #[test]
    fn time_conversion_is_exact() {
        let out = normalize(&[raw("AStar")], &NormalizerConfig::overview());
        assert!((out[0].time_ms - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_time_is_zero() {
        let mut row = raw("AStar");
        row.time_ns = None;
        let out = normalize(&[row], &NormalizerConfig::overview());
        assert_eq!(out[0].time_ms, 0.0);
    }

    #[test]
    fn success_coercion_is_string_equality_with_true() {
        for (token, expected) in [
            ("TRUE", true),
            ("true", true),
            // A boolean true's string form is "true".
            ("True", true),
            // A numeric 1's string form is "1", not "true".
            ("1", false),
            ("false", false),
            ("yes", false),
        ] {
            assert_eq!(coerce_success(Some(token)), expected, "token {token:?}");
        }
        assert!(!coerce_success(None));
    }

    #[test]
    fn heuristic_is_trimmed() {
        let out = normalize(&[raw("AStar")], &NormalizerConfig::overview());
        assert_eq!(out[0].heuristic, "SCALED_MANHATTAN");
    }

    #[test]
    fn absent_heuristic_becomes_unknown() {
        let mut row = raw("AStar");
        row.heuristic = None;
        let out = normalize(&[row], &NormalizerConfig::overview());
        assert_eq!(out[0].heuristic, "Unknown");
    }

    #[test]
    fn infinite_cost_policies() {
        let mut row = raw("AStar");
        row.cost = Some("Infinity".to_string());

        let absent = normalize(&[row.clone()], &NormalizerConfig::overview());
        assert_eq!(absent[0].cost, None);

        let sentinel = normalize(&[row], &NormalizerConfig::ml_report());
        assert_eq!(sentinel[0].cost, Some(INFINITE_COST_SENTINEL));
    }

    #[test]
    fn unparseable_cost_is_absent() {
        let mut row = raw("AStar");
        row.cost = Some("NaN".to_string());
        let out = normalize(&[row], &NormalizerConfig::overview());
        assert_eq!(out[0].cost, None);
    }

    #[test]
    fn unlimited_memory_marker() {
        let out = normalize(&[raw("AStar")], &NormalizerConfig::overview());
        assert_eq!(out[0].mem_limit, Some(UNLIMITED_MEMORY_SENTINEL));
        assert_eq!(out[0].mem_limit_label.as_deref(), Some("Unlimited"));
    }

    #[test]
    fn finite_memory_limit_keeps_value_and_label() {
        let mut row = raw("AStar");
        row.memory_limit = Some(1000.0);
        let out = normalize(&[row], &NormalizerConfig::overview());
        assert_eq!(out[0].mem_limit, Some(1000.0));
        assert_eq!(out[0].mem_limit_label.as_deref(), Some("1000"));
    }
}
