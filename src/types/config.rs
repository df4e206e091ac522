use crate::error::SeoScoreError;
use crate::types::report::Priority;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoScoreConfig {
    pub report: Option<ReportConfig>,
    pub thresholds: Option<ThresholdConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Md,
    Json,
    Sarif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrioritySetting {
    High,
    Medium,
    Low,
}

impl From<PrioritySetting> for Priority {
    fn from(setting: PrioritySetting) -> Self {
        match setting {
            PrioritySetting::High => Priority::High,
            PrioritySetting::Medium => Priority::Medium,
            PrioritySetting::Low => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<FormatSetting>,
    pub min_priority: Option<PrioritySetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdConfig {
    pub fail_under: Option<u32>,
    pub warn_under: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreThresholds {
    pub fail_under: u32,
    pub warn_under: u32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            fail_under: 40,
            warn_under: 70,
        }
    }
}

impl SeoScoreConfig {
    pub fn format(&self) -> Option<FormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn min_priority(&self) -> Priority {
        self.report
            .as_ref()
            .and_then(|report| report.min_priority)
            .map(Priority::from)
            .unwrap_or(Priority::Low)
    }

    pub fn thresholds(&self) -> ScoreThresholds {
        let defaults = ScoreThresholds::default();
        match &self.thresholds {
            Some(thresholds) => ScoreThresholds {
                fail_under: thresholds.fail_under.unwrap_or(defaults.fail_under),
                warn_under: thresholds.warn_under.unwrap_or(defaults.warn_under),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), SeoScoreError> {
        let thresholds = self.thresholds();
        if thresholds.fail_under > 100 {
            return Err(SeoScoreError::ConfigParse(
                "thresholds.fail_under must be between 0 and 100".to_string(),
            ));
        }
        if thresholds.warn_under > 100 {
            return Err(SeoScoreError::ConfigParse(
                "thresholds.warn_under must be between 0 and 100".to_string(),
            ));
        }
        if thresholds.fail_under > thresholds.warn_under {
            return Err(SeoScoreError::ConfigParse(format!(
                "thresholds.fail_under ({}) cannot exceed thresholds.warn_under ({})",
                thresholds.fail_under, thresholds.warn_under
            )));
        }
        Ok(())
    }
}
