//! TOML-based configuration for KeyLimit.
//!
//! A config file selects the physical layout, patches it with override
//! records, and lists the fields to guard:
//!
//! ```toml
//! [layout]
//! preset = "jis109"
//!
//! [[layout.overrides]]
//! character = "@"
//! keys = [{ code = 0xC0 }]
//!
//! [[fields]]
//! name = "mail"
//! classes = ["alnum"]
//! extra = "@-_."
//! ```
//!
//! Every section is optional; an empty file is the US 101 layout with no
//! overrides and no fields.  Class names are kept as strings here and
//! checked when the policies are built, so an unknown name is reported with
//! the field it belongs to.
//!
//! Override records can also be read from JSON, the format browser-side
//! tooling emits: `[{ "character": "@", "keys": [{ "code": 192 }] }]`.

use std::path::{Path, PathBuf};

use keylimit_core::OverrideRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A JSON override list could not be parsed.
    #[error("failed to parse override JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GuardConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub fields: Vec<FieldRule>,
}

/// Which physical keyboard to translate for.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// US 101-key.
    #[default]
    Us101,
    /// Japanese 106/109-key.
    Jis109,
}

/// Layout selection plus local patches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub preset: LayoutPreset,
    /// Applied on top of `preset`, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideRecord>,
}

/// What one named field accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldRule {
    /// Identifier the host uses to look up the field's policy.
    pub name: String,
    /// Built-in class names (`digit`, `hex`, `lower`, `upper`, `alpha`,
    /// `alnum`, `graph`, `mail`).
    #[serde(default)]
    pub classes: Vec<String>,
    /// Extra literal characters.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

impl GuardConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or does not
    /// match the schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the config as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Parses a JSON array of override records.
///
/// # Errors
///
/// Returns [`ConfigError::Json`] if the text is not a list of records, for
/// example when a record lacks `keys` or a code is above 255.
pub fn overrides_from_json_str(text: &str) -> Result<Vec<OverrideRecord>, ConfigError> {
    Ok(serde_json::from_str(text)?)
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Loads a config from `path`, returning [`GuardConfig::default()`] if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<GuardConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => GuardConfig::from_toml_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no config at {}, using defaults", path.display());
            Ok(GuardConfig::default())
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &GuardConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = config.to_toml_string()?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
