//! # hat-viz: Chart Specifications
//!
//! Serializable chart specs for the benchmark dashboards. The toolkit never
//! rasterizes anything: each chart is a `(target id, series, layout)` triple
//! serialized to JSON and handed to an external renderer.
//!
//! [`builders`] assembles the spec for every dashboard chart from the
//! `hat-analytics` outputs; [`spec`] is the data model.

pub mod builders;
pub mod spec;

pub use spec::{
    AxisOptions, BarMode, ChartSpec, LayoutOptions, RenderKind, Series, SeriesX, Theme,
};
