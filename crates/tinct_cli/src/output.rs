use serde::Serialize;
use tinct_theme::{PairReport, PropertyMap};

use crate::cli::OutputFormat;

/// Write a result: JSON, or the human-readable text from `human`
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    human: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Human => print!("{}", human(value)),
    }
    Ok(())
}

/// `--name: value;` lines, one per property
pub fn properties(map: &PropertyMap) -> String {
    map.iter()
        .map(|(name, value)| format!("{name}: {value};\n"))
        .collect()
}

/// Reports grouped by category, in catalogue order
pub fn audit(reports: &[PairReport]) -> String {
    let mut out = String::new();
    let mut category = None;
    for report in reports {
        if category != Some(report.pair.category) {
            category = Some(report.pair.category);
            out.push_str(&format!("{}\n", report.pair.category));
        }
        let pair = format!("{} / {}", report.pair.background, report.pair.foreground);
        match report.result {
            Some(result) => out.push_str(&format!(
                "  {pair:<48} {:>6.2}:1  {:<4} (large {})\n",
                result.ratio, result.grade, result.large_text_grade
            )),
            None => out.push_str(&format!("  {pair:<48} unavailable\n")),
        }
    }
    out
}
