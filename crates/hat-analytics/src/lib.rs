//! # hat-analytics: Filtering and Aggregation
//!
//! The analysis layer of the HAT toolkit: enumerating filter options from a
//! normalized dataset, selecting row subsets, and aggregating paired
//! comparison statistics between heuristic series. Every function here is
//! pure; the dataset is read, never mutated.
//!
//! The pipeline runs filter -> group -> mean -> chart spec:
//!
//! ```text
//! build_index(records) -> FilterOptions          (dropdown contents)
//! filter(records, selection) -> subset           (AND across dimensions)
//! aggregate(reference, candidate, group_by)      (paired group means)
//! comparison_stats(pairs)                        (win rate, reduction, ...)
//! ```

pub mod aggregate;
pub mod index;
pub mod ml;
pub mod overview;
pub mod query;
pub mod sample;

pub use aggregate::{
    aggregate, comparison_stats, ComparisonRecord, ComparisonStats, CostDeviation, GroupBy,
    SeriesMeans, OPTIMAL_DEVIATION_THRESHOLD,
};
pub use index::{build_index, FilterOptions, GROUND_TRUTH_HEURISTIC, PREFERRED_ML_MODELS};
pub use ml::{ml_report, MlReport};
pub use overview::{
    failure_rates, heuristic_distribution, memory_wall, ml_bonus, overview_kpis,
    time_space_tradeoff, AlgorithmSeries, DifficultyBucket, FailureBucket, HeuristicSeries,
    MemoryWallSeries, Metric, MlBonus, OverviewKpis, ASTAR, DIFFICULTY_ORDER, SMASTAR,
};
pub use query::{filter, FilterSelection, Selection, ALL};
pub use sample::{stride_sample, MAX_CHART_POINTS};
