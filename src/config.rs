use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::AnalysisError;

/// Optional overrides, read from the working directory when present.
pub const CONFIG_FILE: &str = "analysis.json";

// ---------------------------------------------------------------------------
// Analysis configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    /// Columns coerced to numbers and imputed with their median.
    pub numeric_columns: Vec<String>,
    /// Column whose moments are reported.
    pub analysis_column: String,
    /// `(low, high)`: below `low` is left-skewed, above `high` right-skewed.
    pub skew_thresholds: (f64, f64),
    pub fail_on_missing_columns: bool,
    pub charts: ChartConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data.csv"),
            numeric_columns: ["summer_gold", "summer_total", "total_gold", "total_total"]
                .into_iter()
                .map(String::from)
                .collect(),
            analysis_column: "total_gold".to_string(),
            skew_thresholds: (-2.0, 2.0),
            fail_on_missing_columns: true,
            charts: ChartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub output_dir: PathBuf,
    pub image_size: (u32, u32),
    pub font_size: f64,
    /// Scatter x axis.
    pub participation_column: String,
    /// Scatter y axis.
    pub medals_column: String,
    /// Bar chart ranking column.
    pub rank_column: String,
    /// Bar chart labels.
    pub label_column: String,
    pub top_n: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            image_size: (1200, 720),
            font_size: 18.0,
            participation_column: "total_participation".to_string(),
            medals_column: "total_total".to_string(),
            rank_column: "total_gold".to_string(),
            label_column: "countries".to_string(),
            top_n: 10,
        }
    }
}

impl AnalysisConfig {
    /// Load `path` over the defaults, or the defaults alone when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no {} found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let (low, high) = self.skew_thresholds;
        if low.is_nan() || high.is_nan() || low >= high {
            return Err(AnalysisError::InvalidConfig(format!(
                "skew_thresholds low ({low}) must be below high ({high})"
            )));
        }
        if self.analysis_column.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "analysis_column is empty".to_string(),
            ));
        }
        if self.charts.top_n == 0 {
            return Err(AnalysisError::InvalidConfig("charts.top_n is 0".to_string()));
        }
        let (w, h) = self.charts.image_size;
        if w == 0 || h == 0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "charts.image_size {w}x{h} is empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_the_medal_columns() {
        let config = AnalysisConfig::default();
        assert_eq!(config.numeric_columns.len(), 4);
        assert_eq!(config.analysis_column, "total_gold");
        assert_eq!(config.skew_thresholds, (-2.0, 2.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{ "analysis_column": "summer_gold", "charts": { "top_n": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.analysis_column, "summer_gold");
        assert_eq!(config.charts.top_n, 5);
        assert_eq!(config.charts.label_column, "countries");
        assert_eq!(config.input_path, PathBuf::from("data.csv"));
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = AnalysisConfig {
            skew_thresholds: (1.0, -1.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn absent_file_gives_defaults() {
        let path = std::env::temp_dir().join("medal-stats-no-such-config.json");
        let config = AnalysisConfig::load_or_default(&path).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }
}
