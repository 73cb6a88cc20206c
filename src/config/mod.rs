use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::currency::AmountFormat;
use crate::errors::ConfigError;

/// Label that opens the last line of a category report.
pub const TOTAL_LABEL: &str = "Total:";

/// Environment variable the demo binary reads a config path from.
pub const CONFIG_ENV_VAR: &str = "BUDGET_LEDGER_CONFIG";

/// Layout settings for category reports and the spend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title_width: usize,
    pub title_fill: char,
    pub description_width: usize,
    pub precision: u8,
    pub grouping_separator: Option<char>,
    pub chart_title: String,
    pub chart_marker: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title_width: 30,
            title_fill: '*',
            description_width: 23,
            precision: 2,
            grouping_separator: Some(','),
            chart_title: "Percentage spent by category".into(),
            chart_marker: 'o',
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "report config not found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title_width <= TOTAL_LABEL.len() {
            return Err(ConfigError::Invalid(format!(
                "title_width {} leaves no room for the total",
                self.title_width
            )));
        }
        if self.description_width > self.title_width {
            return Err(ConfigError::Invalid(format!(
                "description_width {} exceeds title_width {}",
                self.description_width, self.title_width
            )));
        }
        Ok(())
    }

    /// Format used for ledger lines and the total.
    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat {
            precision: self.precision,
            grouping_separator: self.grouping_separator,
        }
    }

    /// Columns right of the `Total:` label, so the total lines up with the title.
    pub fn total_width(&self) -> usize {
        self.title_width.saturating_sub(TOTAL_LABEL.len())
    }
}
