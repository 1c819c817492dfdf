//! `hat charts`: export every chart spec as JSON, tables omitted.

use anyhow::Result;
use tracing::warn;

use hat_analytics::{ml_report, FilterSelection, Selection};
use hat_core::NormalizerConfig;
use hat_ui_common::HatConfig;

use crate::common;
use hat_cli::cli::ChartsArgs;

pub fn handle(args: &ChartsArgs) -> Result<()> {
    let config = HatConfig::load().unwrap_or_default();
    let theme = args
        .theme
        .map(Into::into)
        .unwrap_or(config.report.theme);

    // Overview pipeline: all algorithms, infinite costs absent.
    let mut session = common::load_session(&args.data, &config, NormalizerConfig::overview())?;
    session.selection = FilterSelection::from_args(
        Some(args.map_size.as_str()),
        Some(args.difficulty.as_str()),
        Some(args.algorithm.as_str()),
    );
    let rows = session.filtered()?;
    let mut specs =
        common::overview_chart_specs(session.records()?, &rows, args.metric.into(), theme);

    // ML pipeline: AStar only, sentinel infinite costs.
    let mut ml_session = common::load_session(&args.data, &config, NormalizerConfig::ml_report())?;
    ml_session.selection = FilterSelection::from_args(
        Some(args.map_size.as_str()),
        Some(args.difficulty.as_str()),
        None,
    );
    let target = args
        .compare
        .clone()
        .or_else(|| ml_session.dataset().ok()?.index.default_compare_target.clone());
    match target {
        Some(target) => {
            let model = Selection::from(args.model.as_str());
            match ml_report(ml_session.records()?, &ml_session.selection, &model, &target) {
                Some(report) => specs.extend(common::ml_chart_specs(&report, theme)),
                None => warn!("insufficient data for the ML comparison charts"),
            }
        }
        None => warn!("no standard heuristic found; skipping the ML comparison charts"),
    }

    common::write_specs(&specs, &args.out)
}
