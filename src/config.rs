use crate::error::{Result, SeoScoreError};
use crate::types::config::SeoScoreConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "seoscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".seoscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/seoscore/config.toml";

pub fn load_config(root: &Path) -> Result<Option<SeoScoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Candidate config files, lowest precedence first.
pub(crate) fn config_layers(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

/// Returns `None` when the directory has no `seoscore.toml`; global and local
/// layers only apply on top of a project file.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SeoScoreConfig>> {
    if !root.join(DEFAULT_CONFIG_FILE).exists() {
        tracing::debug!(root = %root.display(), "no seoscore.toml, using defaults");
        return Ok(None);
    }

    let present = config_layers(root, global_path)
        .into_iter()
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    let merged = present
        .iter()
        .try_fold(Value::Table(Map::new()), |mut merged, path| {
            overlay(&mut merged, read_layer(path)?);
            Ok::<_, SeoScoreError>(merged)
        })?;
    tracing::debug!(layers = present.len(), "merged config layers");

    let cfg = SeoScoreConfig::deserialize(merged)
        .map_err(|e| SeoScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SeoScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `layer` replaces the base.
fn overlay(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Table(base_table), Value::Table(layer_table)) => {
            for (key, value) in layer_table {
                if let Some(existing) = base_table.get_mut(&key) {
                    overlay(existing, value);
                } else {
                    base_table.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
