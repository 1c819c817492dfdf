//! # hat-core: Benchmark Record Model
//!
//! Provides the data model and row-level derivation rules shared by every
//! HAT crate: raw and normalized benchmark records, the machine-learned vs
//! standard heuristic partition, and the unified error type.
//!
//! ## Pipeline position
//!
//! ```text
//! hat-io (CSV rows) -> hat-core (normalize) -> hat-analytics (filter/aggregate)
//!                                           -> hat-viz (chart specs)
//! ```
//!
//! Everything here is a pure function of its inputs; the only state in the
//! system is the normalized dataset cached by the UI boundary
//! (`hat-ui-common`).

pub mod error;
pub mod heuristics;
pub mod normalize;
pub mod record;

pub use error::{HatError, HatResult};
pub use heuristics::{classify, is_ml, partition, HeuristicClass, ML_HEURISTIC_NAMES};
pub use normalize::{
    normalize, InfiniteCostPolicy, NormalizerConfig, INFINITE_COST_SENTINEL,
    UNLIMITED_MEMORY_SENTINEL,
};
pub use record::{NormalizedRecord, RawRecord};
