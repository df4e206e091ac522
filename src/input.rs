use crate::error::{Result, SeoScoreError};
use crate::types::page::PageInput;
use std::io::Read;
use std::path::Path;

pub const STDIN_MARKER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Toml,
    Json,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(InputFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(InputFormat::Json),
            _ => Err(SeoScoreError::UnsupportedInputFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Reads a page document from disk, or JSON from stdin when `path` is `-`.
pub fn load_page(path: &Path) -> Result<PageInput> {
    if path.as_os_str() == STDIN_MARKER {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        tracing::debug!(bytes = content.len(), "read page input from stdin");
        return parse_page(&content, InputFormat::Json);
    }

    if !path.exists() {
        return Err(SeoScoreError::InputNotFound(path.display().to_string()));
    }
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "read page input");
    parse_page(&content, format)
}

pub fn parse_page(content: &str, format: InputFormat) -> Result<PageInput> {
    let page: PageInput = match format {
        InputFormat::Toml => toml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };
    validate_page(&page)?;
    Ok(page)
}

pub fn validate_page(page: &PageInput) -> Result<()> {
    if page.target_keyword.trim().is_empty() {
        return Err(SeoScoreError::InvalidInput(
            "target_keyword must not be empty".to_string(),
        ));
    }
    Ok(())
}
