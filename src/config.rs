use crate::classify::{Framework, Language, Selection, StyleSystem};
use crate::error::ScanError;
use crate::target::{OverwritePolicy, Scope};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings read from an optional TOML file. Every field is optional so a
/// file only needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub detect: DetectSettings,
    pub target: TargetSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectSettings {
    pub framework: Option<Selection<Framework>>,
    pub style: Option<Selection<StyleSystem>>,
    pub language: Option<Selection<Language>>,
    pub max_files: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetSettings {
    pub scope: Option<Scope>,
    pub name: Option<String>,
    pub path: Option<PathBuf>,
    pub overwrite: Option<OverwritePolicy>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml(&content).map_err(|message| ScanError::ConfigInvalid {
            path: path.to_path_buf(),
            message,
        })?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| e.to_string())
    }

    /// `None` yields the built-in defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ScanError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
