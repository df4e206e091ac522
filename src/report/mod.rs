pub mod json;
pub mod md;
pub mod sarif;

use crate::error::SeoScoreError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, SeoScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SeoScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(SeoScoreError::Json),
    }
}
