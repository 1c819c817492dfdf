//! Filter index builder.
//!
//! One pass over the normalized dataset enumerates the distinct values of
//! every filterable dimension and partitions heuristics into machine-learned
//! vs standard. Defaults are presentation hints; the query engine works with
//! any valid selection.

use std::collections::BTreeSet;

use hat_core::{heuristics, NormalizedRecord};
use serde::Serialize;

/// The ground-truth heuristic preferred as the comparison target.
pub const GROUND_TRUTH_HEURISTIC: &str = "SCALED_MANHATTAN";

/// ML models preferred as the default candidate, in order.
pub const PREFERRED_ML_MODELS: [&str; 2] = ["MLP", "LinearRegression"];

/// Distinct observed values per filterable dimension, plus selection
/// defaults.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    /// Numerically sorted.
    pub map_sizes: Vec<u32>,
    /// Lexicographically sorted.
    pub difficulties: Vec<String>,
    /// Lexicographically sorted.
    pub algorithms: Vec<String>,
    /// Lexicographically sorted ML partition of observed heuristics.
    pub ml_heuristics: Vec<String>,
    /// Lexicographically sorted standard partition of observed heuristics.
    pub standard_heuristics: Vec<String>,
    /// Default ML model; `None` means no models were found.
    pub default_ml_model: Option<String>,
    /// Default comparison target among the standard heuristics.
    pub default_compare_target: Option<String>,
}

/// Scan the dataset once and build the filter index.
pub fn build_index(records: &[NormalizedRecord]) -> FilterOptions {
    let mut map_sizes = BTreeSet::new();
    let mut difficulties = BTreeSet::new();
    let mut algorithms = BTreeSet::new();
    let mut heuristic_names = BTreeSet::new();

    for record in records {
        if let Some(size) = record.map_size {
            map_sizes.insert(size);
        }
        if let Some(difficulty) = &record.difficulty {
            difficulties.insert(difficulty.clone());
        }
        algorithms.insert(record.algorithm.clone());
        heuristic_names.insert(record.heuristic.clone());
    }

    let (ml_heuristics, standard_heuristics) =
        heuristics::partition(heuristic_names.iter().map(String::as_str));

    let default_ml_model = PREFERRED_ML_MODELS
        .iter()
        .find(|preferred| ml_heuristics.iter().any(|h| h == *preferred))
        .map(|p| p.to_string())
        .or_else(|| ml_heuristics.first().cloned());

    let default_compare_target = standard_heuristics
        .iter()
        .find(|h| *h == GROUND_TRUTH_HEURISTIC)
        .cloned()
        .or_else(|| standard_heuristics.first().cloned());

    FilterOptions {
        map_sizes: map_sizes.into_iter().collect(),
        difficulties: difficulties.into_iter().collect(),
        algorithms: algorithms.into_iter().collect(),
        ml_heuristics,
        standard_heuristics,
        default_ml_model,
        default_compare_target,
    }
}
