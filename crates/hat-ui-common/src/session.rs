//! Session state management.
//!
//! [`SessionState`] is the one mutable value in the system: the normalized
//! dataset (written once per load, read thereafter), the current filter
//! selection, and the theme/language toggles. Every analysis runs as a pure
//! function over borrowed views of this state.

use std::path::{Path, PathBuf};

use hat_analytics::{build_index, filter, FilterOptions, FilterSelection};
use hat_core::{normalize, NormalizedRecord, NormalizerConfig};
use hat_io::LoadOutcome;
use hat_viz::Theme;
use tracing::info;

use crate::error::{Error, Result};
use crate::i18n::Lang;

/// Where the current dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Found via the automatic filename chain.
    Auto(PathBuf),
    /// Explicitly selected by the user.
    Manual(PathBuf),
}

impl DataSource {
    pub fn path(&self) -> &Path {
        match self {
            DataSource::Auto(path) | DataSource::Manual(path) => path,
        }
    }
}

/// The loaded dataset plus its filter index.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: DataSource,
    pub records: Vec<NormalizedRecord>,
    pub index: FilterOptions,
}

/// Mutable session state owned by the UI boundary.
#[derive(Debug)]
pub struct SessionState {
    dataset: Option<Dataset>,
    normalizer: NormalizerConfig,
    pub selection: FilterSelection,
    pub theme: Theme,
    pub language: Lang,
}

impl SessionState {
    pub fn new(normalizer: NormalizerConfig) -> Self {
        Self {
            dataset: None,
            normalizer,
            selection: FilterSelection::default(),
            theme: Theme::default(),
            language: Lang::default(),
        }
    }

    /// Session seeded with the configured theme and language.
    pub fn from_config(config: &crate::config::HatConfig, normalizer: NormalizerConfig) -> Self {
        let mut session = Self::new(normalizer);
        session.theme = config.report.theme;
        session.language = config.report.language;
        session
    }

    /// Load through the automatic filename chain. When every attempt fails,
    /// returns [`Error::ManualSelectionRequired`]; the caller resolves that
    /// by asking the user for a path and calling [`Self::load_manual`].
    pub fn load_auto(&mut self, primary: impl AsRef<Path>) -> Result<&Dataset> {
        match hat_io::load(primary) {
            LoadOutcome::Loaded { source, rows } => {
                Ok(self.install(DataSource::Auto(source), &rows))
            }
            LoadOutcome::ManualUploadRequired { attempted } => {
                Err(Error::ManualSelectionRequired { attempted })
            }
        }
    }

    /// Load a user-selected file. Same parse path as the automatic chain,
    /// no further fallback.
    pub fn load_manual(&mut self, path: impl AsRef<Path>) -> Result<&Dataset> {
        let path = path.as_ref();
        let rows = hat_io::load_manual(path).map_err(|source| Error::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        if rows.is_empty() {
            return Err(Error::LoadFailed {
                path: path.to_path_buf(),
                source: anyhow::anyhow!("file parsed to zero data rows"),
            });
        }
        Ok(self.install(DataSource::Manual(path.to_path_buf()), &rows))
    }

    fn install(&mut self, source: DataSource, rows: &[hat_core::RawRecord]) -> &Dataset {
        let records = normalize(rows, &self.normalizer);
        info!(
            "dataset ready: {} of {} rows retained from {}",
            records.len(),
            rows.len(),
            source.path().display()
        );
        let index = build_index(&records);
        self.selection = FilterSelection::default();
        self.dataset.insert(Dataset {
            source,
            records,
            index,
        })
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        self.dataset.as_ref().ok_or(Error::NoDatasetLoaded)
    }

    pub fn records(&self) -> Result<&[NormalizedRecord]> {
        Ok(&self.dataset()?.records)
    }

    /// Rows matching the current filter selection, input order preserved.
    pub fn filtered(&self) -> Result<Vec<&NormalizedRecord>> {
        Ok(filter(self.records()?, &self.selection))
    }

    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::default();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }
}
