//! Benchmark result records.
//!
//! [`RawRecord`] is one row as read from the results CSV, with every column
//! optional so that files missing optional columns still flow through the
//! pipeline. [`NormalizedRecord`] is the derived form consumed by filtering
//! and aggregation; see [`crate::normalize`] for the derivation rules.

use serde::{Deserialize, Serialize};

/// One benchmark run as parsed from the results CSV.
///
/// Field names follow the source schema (`Algorithm`, `Heuristic`, ...).
/// There is no uniqueness constraint: one run is one record and records are
/// independent of each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub algorithm: Option<String>,
    /// May carry surrounding whitespace; trimmed during normalization.
    pub heuristic: Option<String>,
    pub map_size: Option<u32>,
    /// Enumerated token, e.g. EASY / MEDIUM / HARD.
    pub difficulty: Option<String>,
    /// Raw cost token; either a number or the literal `Infinity`.
    pub cost: Option<String>,
    pub time_ns: Option<u64>,
    /// Truthy token; coerced case-insensitively against `"true"`.
    pub success: Option<String>,
    pub nodes_expanded: Option<f64>,
    pub pruned_nodes: Option<f64>,
    pub memory_used: Option<f64>,
    /// `-1` means unlimited.
    pub memory_limit: Option<f64>,
    pub optimal_cost: Option<f64>,
}

/// A benchmark run with derived fields, ready for filtering and aggregation.
///
/// Every `NormalizedRecord` derives from exactly one [`RawRecord`]; the
/// derivation is pure and records lacking an `Algorithm` are dropped.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedRecord {
    pub algorithm: String,
    /// Trimmed heuristic name; `Unknown` when the column was absent.
    pub heuristic: String,
    pub map_size: Option<u32>,
    pub difficulty: Option<String>,
    /// Parsed cost. `None` either because the column was absent/unparseable
    /// or because the infinite-cost policy maps `Infinity` to an absent
    /// value; the sentinel policy yields a large finite number instead.
    pub cost: Option<f64>,
    /// `Time_ns / 1_000_000`, with a missing `Time_ns` treated as zero.
    pub time_ms: f64,
    pub success: bool,
    pub nodes_expanded: Option<f64>,
    pub pruned_nodes: Option<f64>,
    pub memory_used: Option<f64>,
    /// Memory limit with the `-1` unlimited marker replaced by a sentinel.
    pub mem_limit: Option<f64>,
    /// Human label: `Unlimited` for the `-1` marker, else the raw limit.
    pub mem_limit_label: Option<String>,
    pub optimal_cost: Option<f64>,
}

impl NormalizedRecord {
    /// Whether this run solved its instance optimally, within the fixed
    /// 0.1 tolerance. `None` when cost or optimal cost is unavailable.
    pub fn is_optimal(&self) -> Option<bool> {
        match (self.cost, self.optimal_cost) {
            (Some(cost), Some(optimal)) => Some(cost - optimal <= 0.1),
            _ => None,
        }
    }
}
