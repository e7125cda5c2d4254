use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
///
/// Everything is optional; a missing config file means defaults. Example
/// YAML:
/// ```yaml
/// output_dir: /home/you/medallions
/// save_reports: true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory forged reports are written to (default: current directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Whether to persist a report file after each forge session
    #[serde(default = "default_save_reports")]
    pub save_reports: bool,
}

fn default_save_reports() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            save_reports: true,
        }
    }
}

impl Config {
    /// Resolved directory for report output.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
