//! `hat report`: the overview dashboard rendered to the terminal.

use std::io::{self, Write};

use anyhow::Result;
use tabwriter::TabWriter;

use hat_analytics::{overview, FilterSelection};
use hat_core::NormalizerConfig;
use hat_ui_common::HatConfig;

use crate::common::{self, t};
use hat_cli::cli::ReportArgs;

pub fn handle(args: &ReportArgs) -> Result<()> {
    let config = HatConfig::load().unwrap_or_default();
    let mut session = common::load_session(&args.data, &config, NormalizerConfig::overview())?;
    if let Some(theme) = args.presentation.theme {
        session.theme = theme.into();
    }
    if let Some(lang) = args.presentation.lang {
        session.language = lang.into();
    }
    session.selection = FilterSelection::from_args(
        Some(args.map_size.as_str()),
        Some(args.difficulty.as_str()),
        Some(args.algorithm.as_str()),
    );

    let lang = session.language;
    let rows = session.filtered()?;
    let Some(kpis) = overview::overview_kpis(&rows) else {
        println!("{}", t("status_insufficient", lang));
        return Ok(());
    };

    println!("{}", t("report_title", lang));
    println!("{}", t("report_subtitle", lang));
    println!();

    let optimality = if kpis.sub_optimal_runs == 0 {
        "✓ 100%".to_string()
    } else {
        format!("⚠ {} Sub-opt", kpis.sub_optimal_runs)
    };
    common::print_kpis(&[
        (t("kpi_total", lang).to_string(), kpis.total_runs.to_string()),
        (
            t("kpi_success", lang).to_string(),
            format!("{:.1}%", kpis.success_rate),
        ),
        (
            t("kpi_time", lang).to_string(),
            format!("{:.2} ms", kpis.mean_time_ms),
        ),
        (t("kpi_optimal", lang).to_string(), optimality),
    ])?;

    let buckets = overview::failure_rates(&rows);
    if !buckets.is_empty() {
        println!("\n{}", t("chart_failure", lang));
        let mut writer = TabWriter::new(io::stdout());
        writeln!(writer, "MEMORY LIMIT\tFAILURE RATE")?;
        for bucket in &buckets {
            writeln!(writer, "{}\t{:.1}%", bucket.limit, bucket.failure_rate)?;
        }
        writer.flush()?;
    }

    if let Some(bonus) = overview::ml_bonus(session.records()?) {
        println!("\n{}", t("chart_ml_bonus", lang));
        let reduction = match bonus.effort_reduction {
            Some(reduction) => common::format_reduction(reduction),
            None => "N/A".to_string(),
        };
        common::print_kpis(&[
            (t("kpi_ml_reduction", lang).to_string(), reduction),
            (
                t("kpi_ml_accuracy", lang).to_string(),
                bonus.cost_prediction_error.to_string(),
            ),
        ])?;
    }

    if let Some(dir) = &args.presentation.charts_out {
        let specs = common::overview_chart_specs(
            session.records()?,
            &rows,
            args.metric.into(),
            session.theme,
        );
        common::write_specs(&specs, dir)?;
    }

    Ok(())
}
