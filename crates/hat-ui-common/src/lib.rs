//! # HAT UI Common
//!
//! Shared services for HAT front ends: the session state every interface
//! drives (dataset cache, filter selection, theme, language), the unified
//! TOML configuration, and the bilingual UI string table.
//!
//! ## Architecture
//!
//! ```text
//! hat-cli ──► SessionState ──► hat-io, hat-core, hat-analytics
//! ```
//!
//! The functional core stays pure; this crate owns the one mutable value in
//! the system (the loaded dataset plus current selections) and hands
//! borrowed views to the analysis functions.

pub mod config;
pub mod error;
pub mod i18n;
pub mod session;

pub use config::{CoreConfig, HatConfig, ReportConfig};
pub use error::{Error, Result};
pub use i18n::{text, Lang};
pub use session::{DataSource, Dataset, SessionState};
