//! Chart spec data model.
//!
//! Mirrors what the external renderer consumes: per-series data with a render
//! kind and colour, plus layout options (bar mode, axis titles, log/reversed
//! axes, theme colours).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How one series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Bar,
    Box,
    Scatter,
}

/// X values of one series: categorical labels or numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesX {
    Labels(Vec<String>),
    Values(Vec<f64>),
}

/// One renderable series.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: RenderKind,
    /// Absent for box series keyed by series name alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<SeriesX>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-point colours, for bars that switch colour on a threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_colors: Option<Vec<String>>,
}

impl Series {
    pub fn bar(name: impl Into<String>, labels: Vec<String>, y: Vec<f64>, color: &str) -> Self {
        Self {
            name: name.into(),
            kind: RenderKind::Bar,
            x: Some(SeriesX::Labels(labels)),
            y,
            color: Some(color.to_string()),
            point_colors: None,
        }
    }

    pub fn boxed(name: impl Into<String>, y: Vec<f64>, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: RenderKind::Box,
            x: None,
            y,
            color: color.map(str::to_string),
            point_colors: None,
        }
    }

    pub fn scatter(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind: RenderKind::Scatter,
            x: Some(SeriesX::Values(x)),
            y,
            color: None,
            point_colors: None,
        }
    }
}

/// Grouped-bar placement; the only mode the dashboards use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
}

/// Options for one axis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub log_scale: bool,
    pub reversed: bool,
}

impl AxisOptions {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}

/// Light/dark rendering theme. Chart specs carry the resolved colours so the
/// renderer stays theme-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn font_color(&self) -> &'static str {
        match self {
            Theme::Dark => "#94a3b8",
            Theme::Light => "#64748b",
        }
    }

    pub fn grid_color(&self) -> &'static str {
        match self {
            Theme::Dark => "#334155",
            Theme::Light => "#e2e8f0",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Layout options shared by every chart, themed.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub font_color: String,
    pub grid_color: String,
}

impl LayoutOptions {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            bar_mode: None,
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
            font_color: theme.font_color().to_string(),
            grid_color: theme.grid_color().to_string(),
        }
    }
}

/// A complete chart: target element id, series, layout.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub target_id: String,
    pub series: Vec<Series>,
    pub layout: LayoutOptions,
}

impl ChartSpec {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the spec as `<target_id>.json` under `dir`, creating the
    /// directory if needed.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating chart output dir {}", dir.display()))?;
        let path = dir.join(format!("{}.json", self.target_id));
        let payload = self
            .to_json_pretty()
            .with_context(|| format!("serializing chart spec {}", self.target_id))?;
        fs::write(&path, payload)
            .with_context(|| format!("writing chart spec to {}", path.display()))?;
        Ok(path)
    }
}
