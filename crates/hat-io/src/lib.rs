//! # hat-io: Benchmark Results Ingestion
//!
//! CSV ingestion for the HAT toolkit: a tolerant header-mapped reader and a
//! loader that walks the primary/alternate/manual fallback chain. All
//! parsing flows through one path, so a manually-selected file behaves
//! exactly like an auto-discovered one.

pub mod loader;
pub mod reader;

pub use loader::{
    load, load_manual, LoadOutcome, ALTERNATE_RESULTS_FILE, PRIMARY_RESULTS_FILE,
};
pub use reader::{read_raw_records, read_raw_records_from_path};
