//! Results loading with a fallback filename chain.
//!
//! The loader tries the primary filename, then exactly one fixed alternate
//! in the same directory, then signals that the boundary must ask the user
//! for a file. Attempts are strictly sequential and failure is never fatal.

use std::path::{Path, PathBuf};

use anyhow::Result;
use hat_core::RawRecord;
use tracing::{info, warn};

use crate::reader::read_raw_records_from_path;

/// Default results filename tried first.
pub const PRIMARY_RESULTS_FILE: &str = "benchmark_results.csv";

/// Fixed alternate filename tried after the primary fails or is empty.
pub const ALTERNATE_RESULTS_FILE: &str = "Data.csv";

/// Terminal state of a load attempt chain.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Rows parsed from `source`.
    Loaded {
        source: PathBuf,
        rows: Vec<RawRecord>,
    },
    /// Every fetch attempt failed or yielded zero rows; the boundary must
    /// resolve this by asking the user to pick a file explicitly.
    ManualUploadRequired { attempted: Vec<PathBuf> },
}

/// Load benchmark rows starting from `primary`, falling back once to
/// [`ALTERNATE_RESULTS_FILE`] in the same directory.
pub fn load(primary: impl AsRef<Path>) -> LoadOutcome {
    let primary = primary.as_ref().to_path_buf();
    let mut attempted = Vec::new();

    match try_load(&primary) {
        Some(rows) => {
            return LoadOutcome::Loaded {
                source: primary,
                rows,
            }
        }
        None => attempted.push(primary.clone()),
    }

    // Second attempt only begins after the first has failed, and only when
    // the primary was not already the alternate name.
    if primary.file_name().map(|n| n == ALTERNATE_RESULTS_FILE) != Some(true) {
        let alternate = primary
            .parent()
            .map(|dir| dir.join(ALTERNATE_RESULTS_FILE))
            .unwrap_or_else(|| PathBuf::from(ALTERNATE_RESULTS_FILE));
        match try_load(&alternate) {
            Some(rows) => {
                return LoadOutcome::Loaded {
                    source: alternate,
                    rows,
                }
            }
            None => attempted.push(alternate),
        }
    }

    warn!("results auto-load failed; manual file selection required");
    LoadOutcome::ManualUploadRequired { attempted }
}

/// Load benchmark rows from a user-selected file. Same parse path as the
/// automatic chain, with no further fallback.
pub fn load_manual(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    read_raw_records_from_path(path.as_ref())
}

fn try_load(path: &Path) -> Option<Vec<RawRecord>> {
    match read_raw_records_from_path(path) {
        Ok(rows) if !rows.is_empty() => {
            info!("loaded {} rows from {}", rows.len(), path.display());
            Some(rows)
        }
        Ok(_) => {
            warn!("{} parsed to zero rows", path.display());
            None
        }
        Err(err) => {
            warn!("failed to load {}: {err:#}", path.display());
            None
        }
    }
}
