//! Dropdown-driven row filtering.
//!
//! A [`FilterSelection`] holds one [`Selection`] per dimension; non-wildcard
//! dimensions apply as equality predicates combined with logical AND.
//! Selections arrive from the UI as strings, so numeric dimensions are
//! coerced to the record's native type before comparison.

use std::fmt;

use hat_core::NormalizedRecord;
use serde::Serialize;

/// The wildcard token used by the UI for "no constraint".
pub const ALL: &str = "ALL";

/// One dimension's selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// No constraint.
    #[default]
    All,
    /// Equality constraint against this value.
    Value(String),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Value(v) => Some(v),
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        if s == ALL {
            Selection::All
        } else {
            Selection::Value(s.to_string())
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Value(v) => f.write_str(v),
        }
    }
}

/// Current filter state across the shared row dimensions.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub map_size: Selection,
    pub difficulty: Selection,
    pub algorithm: Selection,
}

impl FilterSelection {
    /// Build from optional UI strings; `None` and `"ALL"` both mean no
    /// constraint.
    pub fn from_args(
        map_size: Option<&str>,
        difficulty: Option<&str>,
        algorithm: Option<&str>,
    ) -> Self {
        let pick = |arg: Option<&str>| arg.map(Selection::from).unwrap_or_default();
        Self {
            map_size: pick(map_size),
            difficulty: pick(difficulty),
            algorithm: pick(algorithm),
        }
    }
}

/// Return the records matching every non-wildcard dimension, input order
/// preserved. An empty selection returns the whole input.
pub fn filter<'a>(
    records: &'a [NormalizedRecord],
    selection: &FilterSelection,
) -> Vec<&'a NormalizedRecord> {
    // Selections hold UI strings; the map size compares numerically.
    let wanted_size = selection
        .map_size
        .value()
        .map(|s| s.parse::<u32>().ok());

    records
        .iter()
        .filter(|record| {
            if let Some(size) = &wanted_size {
                // An unparseable size selection matches nothing.
                if size.is_none() || *size != record.map_size {
                    return false;
                }
            }
            if let Some(difficulty) = selection.difficulty.value() {
                if record.difficulty.as_deref() != Some(difficulty) {
                    return false;
                }
            }
            if let Some(algorithm) = selection.algorithm.value() {
                if record.algorithm != algorithm {
                    return false;
                }
            }
            true
        })
        .collect()
}
