//! `hat ml`: machine-learned vs standard heuristic comparison report.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tabwriter::TabWriter;

use hat_analytics::{ml_report, FilterSelection, Selection};
use hat_core::NormalizerConfig;
use hat_ui_common::HatConfig;

use crate::common::{self, t};
use hat_cli::cli::MlArgs;

pub fn handle(args: &MlArgs) -> Result<()> {
    let config = HatConfig::load().unwrap_or_default();
    let mut session = common::load_session(&args.data, &config, NormalizerConfig::ml_report())?;
    if let Some(theme) = args.presentation.theme {
        session.theme = theme.into();
    }
    if let Some(lang) = args.presentation.lang {
        session.language = lang.into();
    }
    session.selection = FilterSelection::from_args(
        Some(args.map_size.as_str()),
        Some(args.difficulty.as_str()),
        None,
    );

    let lang = session.language;
    let target = match &args.compare {
        Some(target) => target.clone(),
        None => session
            .dataset()?
            .index
            .default_compare_target
            .clone()
            .context("no standard heuristic found in the dataset")?,
    };
    let model = Selection::from(args.model.as_str());

    let Some(report) = ml_report(session.records()?, &session.selection, &model, &target) else {
        println!("{}", t("status_insufficient", lang));
        return Ok(());
    };

    println!("{}", t("ml_report_title", lang));
    println!("{}", t("ml_report_subtitle", lang));
    println!();
    println!(
        "{} vs {}",
        report.candidate_label(),
        report.target_heuristic
    );

    let mut kpis = vec![(
        t("kpi_win_rate", lang).to_string(),
        format!("{:.1}%", report.success_rate),
    )];
    match &report.stats {
        Some(stats) => {
            kpis.push((
                t("kpi_node_reduction", lang).to_string(),
                common::format_reduction(stats.work_reduction),
            ));
            kpis.push((
                t("kpi_time_overhead", lang).to_string(),
                format!("{:+.2} ms", stats.time_overhead_ms),
            ));
            kpis.push((
                t("kpi_accuracy", lang).to_string(),
                stats.cost_deviation.to_string(),
            ));
            kpis.push(("Win Rate".to_string(), format!("{:.1}%", stats.win_rate)));
        }
        None => {
            println!("{}", t("status_insufficient", lang));
        }
    }
    common::print_kpis(&kpis)?;

    if !report.pairs.is_empty() {
        println!();
        let mut writer = TabWriter::new(io::stdout());
        writeln!(writer, "GROUP\tREF NODES\tAI NODES\tREF MS\tAI MS")?;
        for pair in &report.pairs {
            writeln!(
                writer,
                "{}\t{:.1}\t{:.1}\t{:.2}\t{:.2}",
                pair.label,
                pair.reference.nodes,
                pair.candidate.nodes,
                pair.reference.time_ms,
                pair.candidate.time_ms,
            )?;
        }
        writer.flush()?;
    }

    if let Some(dir) = &args.presentation.charts_out {
        let specs = common::ml_chart_specs(&report, session.theme);
        common::write_specs(&specs, dir)?;
    }

    Ok(())
}
