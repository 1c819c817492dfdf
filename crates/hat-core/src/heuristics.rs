//! Classification of heuristic names into machine-learned vs standard.
//!
//! Membership is a fixed enumerated list: heuristic names introduced
//! upstream that are not on the list fall into the standard bucket.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Heuristics whose estimates come from a learned model rather than a
/// closed-form formula.
pub const ML_HEURISTIC_NAMES: [&str; 7] = [
    "MLP",
    "LinearRegression",
    "Ridge",
    "Lasso",
    "ElasticNet",
    "Polynomial2",
    "MachineLearned",
];

static ML_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ML_HEURISTIC_NAMES.iter().copied().collect());

/// Which side of the ML/standard partition a heuristic name falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicClass {
    MachineLearned,
    Standard,
}

/// Classify a heuristic name. Pure function of the name string.
pub fn classify(name: &str) -> HeuristicClass {
    if ML_SET.contains(name) {
        HeuristicClass::MachineLearned
    } else {
        HeuristicClass::Standard
    }
}

/// Shorthand for `classify(name) == HeuristicClass::MachineLearned`.
pub fn is_ml(name: &str) -> bool {
    classify(name) == HeuristicClass::MachineLearned
}

/// Partition distinct heuristic names into (machine-learned, standard),
/// each sorted lexicographically.
pub fn partition<'a, I>(names: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ml = Vec::new();
    let mut standard = Vec::new();
    for name in names {
        match classify(name) {
            HeuristicClass::MachineLearned => ml.push(name.to_string()),
            HeuristicClass::Standard => standard.push(name.to_string()),
        }
    }
    ml.sort();
    standard.sort();
    (ml, standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_are_ml() {
        for name in ML_HEURISTIC_NAMES {
            assert_eq!(classify(name), HeuristicClass::MachineLearned);
        }
    }

    #[test]
    fn unknown_names_are_standard() {
        assert_eq!(classify("SCALED_MANHATTAN"), HeuristicClass::Standard);
        assert_eq!(classify("DIJKSTRA"), HeuristicClass::Standard);
        // Unlisted upstream additions land in the standard bucket.
        assert_eq!(classify("GradientBoost"), HeuristicClass::Standard);
    }

    #[test]
    fn classification_is_case_sensitive() {
        assert!(is_ml("MLP"));
        assert!(!is_ml("mlp"));
    }

    #[test]
    fn partition_sorts_both_sides() {
        let names = ["Ridge", "DIJKSTRA", "MLP", "SCALED_MANHATTAN", "Lasso"];
        let (ml, std) = partition(names);
        assert_eq!(ml, vec!["Lasso", "MLP", "Ridge"]);
        assert_eq!(std, vec!["DIJKSTRA", "SCALED_MANHATTAN"]);
    }
}
