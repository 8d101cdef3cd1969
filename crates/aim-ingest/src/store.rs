//! File-backed persistence for sheet mapping configurations.
//!
//! Saved mappings let a sheet that was disambiguated once be re-opened with
//! the same column↔field associations: columns are re-identified by letter
//! position, and the stored field names are treated as opaque display
//! strings. One JSON file per sheet id.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use aim_model::SheetMappingConfig;

/// Directory-based store of [`SheetMappingConfig`] files.
#[derive(Debug, Clone)]
pub struct MappingStore {
    base_dir: PathBuf,
}

impl MappingStore {
    /// Opens (creating if needed) a store rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("create mapping store: {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves a sheet's mapping config, overwriting any previous version.
    pub fn save(&self, config: &SheetMappingConfig) -> Result<PathBuf> {
        let path = self.config_path(&config.sheet_id);
        let json = serde_json::to_string_pretty(config)
            .with_context(|| format!("serialize mapping for {}", config.sheet_id))?;
        fs::write(&path, json)
            .with_context(|| format!("write mapping to {}", path.display()))?;
        Ok(path)
    }

    /// Loads a sheet's mapping config, or `None` when nothing was saved.
    pub fn load(&self, sheet_id: &str) -> Result<Option<SheetMappingConfig>> {
        let path = self.config_path(sheet_id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("read mapping from {}", path.display()))?;
        let config: SheetMappingConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parse mapping from {}", path.display()))?;
        Ok(Some(config))
    }

    /// Lists the sheet ids with a saved config, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("read mapping store: {}", self.base_dir.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            if let Ok(config) = serde_json::from_str::<SheetMappingConfig>(&contents) {
                ids.push(config.sheet_id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn exists(&self, sheet_id: &str) -> bool {
        self.config_path(sheet_id).exists()
    }

    fn config_path(&self, sheet_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", file_safe_id(sheet_id)))
    }
}

/// Normalizes a sheet id for use as a filename.
fn file_safe_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
