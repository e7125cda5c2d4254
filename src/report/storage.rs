use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::ScoreBreakdown;
use crate::selection::Selection;

use super::panels::{render_breakdown, render_info};
use super::text::sanitize_file_stem;

/// Build the report file name: stable prefix, sanitized owner name, and a
/// creation timestamp so sessions never collide.
pub fn report_file_name(name: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "medallion_{}_{}.txt",
        sanitize_file_stem(name),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Full plain-text contents of the persisted report. Human-readable only;
/// there is no round-trip format.
pub fn report_contents(
    selection: &Selection,
    breakdown: &ScoreBreakdown,
    timestamp: DateTime<Local>,
) -> String {
    let rule = "=".repeat(58);
    [
        rule.clone(),
        "        FORGED MEDALLION - KAER MORHEN ACADEMY".to_string(),
        rule.clone(),
        String::new(),
        "APPRENTICE:".to_string(),
        render_info(selection),
        String::new(),
        render_breakdown(breakdown),
        String::new(),
        format!(
            "CLASSIFICATION: {} {}",
            breakdown.classification().title(),
            breakdown.classification().badge()
        ),
        format!("Created: {}", timestamp.format("%Y-%m-%d %H:%M:%S")),
        String::new(),
        "\"Every great witcher began with a single forged medallion.\"".to_string(),
        "                                - Vesemir of Kaer Morhen".to_string(),
        rule,
        String::new(),
    ]
    .join("\n")
}

/// Write the report into `dir`, creating it if needed. The write goes
/// through an atomic temp file so a failed write never leaves a partial
/// report behind. Returns the path written.
pub fn save_report(
    dir: &Path,
    selection: &Selection,
    breakdown: &ScoreBreakdown,
    timestamp: DateTime<Local>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(report_file_name(&selection.name, timestamp));
    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open report file at {}", path.display()))?;
    file.write_all(report_contents(selection, breakdown, timestamp).as_bytes())
        .context("Failed to write report")?;
    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    Ok(path)
}
