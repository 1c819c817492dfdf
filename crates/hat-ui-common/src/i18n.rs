//! Bilingual UI string table.
//!
//! Display strings keyed by UI element identifier, with an English and a
//! Persian rendition per key. Lookup under `fa` falls back to the English
//! entry for keys that have no translation yet. The functional core never
//! reads this table; only the presentation layer does.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Fa,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fa => "fa",
        }
    }

    /// Persian renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Lang::Fa)
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Fa,
            Lang::Fa => Lang::En,
        }
    }
}

struct Entry {
    en: &'static str,
    fa: Option<&'static str>,
}

const fn entry(en: &'static str, fa: &'static str) -> Entry {
    Entry { en, fa: Some(fa) }
}

/// English-only entry; Persian lookup falls back to it.
const fn untranslated(en: &'static str) -> Entry {
    Entry { en, fa: None }
}

static TABLE: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    HashMap::from([
        (
            "report_title",
            entry("Pathfinding Algorithm Analysis", "تحلیل الگوریتم‌های مسیریابی"),
        ),
        (
            "report_subtitle",
            entry(
                "A comparative study of A* vs SMA* under varying memory constraints.",
                "مقایسه A* و SMA* تحت محدودیت‌های مختلف حافظه.",
            ),
        ),
        (
            "ml_report_title",
            entry("AI Heuristic Performance Report", "گزارش عملکرد هیوریستیک AI"),
        ),
        (
            "ml_report_subtitle",
            entry(
                "Statistical comparison: Machine Learning vs Standard methods.",
                "مقایسه آماری بین هوش مصنوعی و روش‌های استاندارد.",
            ),
        ),
        ("lbl_map_size", entry("Map Size", "اندازه نقشه")),
        ("lbl_difficulty", entry("Difficulty", "درجه سختی")),
        ("lbl_algorithm", entry("Algorithm", "الگوریتم")),
        ("lbl_ml_model", entry("Select ML Model", "انتخاب مدل ML")),
        ("lbl_compare_vs", entry("Compare AI Against", "مقایسه با")),
        ("opt_all", entry("All / Any", "همه موارد")),
        ("btn_reset", entry("Reset Filters", "بازنشانی فیلترها")),
        ("kpi_total", entry("Total Runs", "تعداد اجرا")),
        ("kpi_success", entry("Success Rate", "نرخ موفقیت")),
        ("kpi_time", entry("Avg Time", "میانگین زمان")),
        ("kpi_optimal", entry("Optimality", "بهینگی")),
        ("kpi_win_rate", entry("AI Efficiency (Avg)", "کارایی AI (میانگین)")),
        ("kpi_node_reduction", entry("Avg Work Saved", "کاهش کار")),
        ("kpi_time_overhead", entry("Avg Time Difference", "تفاوت زمانی")),
        ("kpi_accuracy", entry("Avg Cost Deviation", "انحراف هزینه")),
        ("kpi_ml_reduction", entry("Avg Effort Reduction", "کاهش تلاش (بهبود)")),
        ("kpi_ml_accuracy", entry("Cost Prediction Error", "خطای تخمین هزینه")),
        ("chart_heuristic", entry("Heuristic Efficiency", "کارایی هیوریستیک‌ها")),
        ("chart_memory", entry("The Memory Wall (SMA*)", "دیوار حافظه در SMA*")),
        ("chart_failure", entry("Failure & Survival Analysis", "تحلیل نرخ شکست")),
        ("chart_tradeoff", entry("Time vs. Space Tradeoff", "مبادله زمان و فضا")),
        (
            "chart_ml_bonus",
            entry("AI vs Standard (Bonus)", "هوش مصنوعی در برابر استاندارد (امتیازی)"),
        ),
        (
            "chart_ml_efficiency",
            entry("Search Efficiency (Avg Nodes)", "کارایی جستجو (میانگین)"),
        ),
        ("chart_ml_distribution", entry("Performance Distribution", "توزیع عملکرد")),
        ("chart_ml_time", entry("The Cost of Thinking (Time)", "هزینه تفکر (زمان)")),
        ("status_insufficient", untranslated("Insufficient data for comparison.")),
        ("status_loading", untranslated("Parsing CSV file...")),
    ])
});

/// Look up a display string. Under `fa`, keys without a Persian entry fall
/// back to English; unknown keys return `None`.
pub fn text(key: &str, lang: Lang) -> Option<&'static str> {
    let entry = TABLE.get(key)?;
    match lang {
        Lang::En => Some(entry.en),
        Lang::Fa => Some(entry.fa.unwrap_or(entry.en)),
    }
}
