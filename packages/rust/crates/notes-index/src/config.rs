//! Settings loader for sync-index.
//!
//! Loads `<root>/sync-index.yaml` (or an explicit path) and merges it over the
//! built-in defaults. Every key is optional. A missing or unparseable file
//! falls back to the defaults with a warning, never an error.

use std::path::Path;

use serde::Deserialize;

use crate::render::{
    DEFAULT_DESCRIPTION_LIMIT, DEFAULT_MANIFEST_SUMMARY, DEFAULT_MANIFEST_TITLE, ManifestPreamble,
};

/// Settings file looked up in the collection root.
pub const DEFAULT_SETTINGS_FILE: &str = "sync-index.yaml";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    /// Primary collection directory, relative to the root.
    pub notes_dir: String,
    /// Secondary collection directory, relative to the root.
    pub guides_dir: String,
    /// File-name suffix of documents.
    pub extension: String,
    /// Grouped index artifact.
    pub index_file: String,
    /// Manifest artifact.
    pub manifest_file: String,
    /// Agent instructions file; checked for existence only.
    pub agents_file: String,
    /// Maximum manifest description length in characters.
    pub description_limit: usize,
    /// Manifest title line.
    pub manifest_title: String,
    /// Manifest summary line.
    pub manifest_summary: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            notes_dir: "notes".to_string(),
            guides_dir: "guides".to_string(),
            extension: notes_scanner::DEFAULT_EXTENSION.to_string(),
            index_file: "INDEX.md".to_string(),
            manifest_file: "llms.txt".to_string(),
            agents_file: "AGENTS.md".to_string(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            manifest_title: DEFAULT_MANIFEST_TITLE.to_string(),
            manifest_summary: DEFAULT_MANIFEST_SUMMARY.to_string(),
        }
    }
}

/// On-disk shape of `sync-index.yaml`.
///
/// Each key overrides the [`IndexSettings`] field of the same name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct SettingsFile {
    pub notes_dir: Option<String>,
    pub guides_dir: Option<String>,
    pub extension: Option<String>,
    pub index_file: Option<String>,
    pub manifest_file: Option<String>,
    pub agents_file: Option<String>,
    pub description_limit: Option<usize>,
    /// Manifest preamble overrides.
    #[serde(default)]
    pub manifest: ManifestSettingsFile,
}

/// `manifest:` section of `sync-index.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSettingsFile {
    /// Overrides [`IndexSettings::manifest_title`].
    pub title: Option<String>,
    /// Overrides [`IndexSettings::manifest_summary`].
    pub summary: Option<String>,
}

impl IndexSettings {
    /// Apply the keys present in `file` on top of these settings.
    #[must_use]
    pub fn merge(self, file: SettingsFile) -> Self {
        Self {
            notes_dir: file.notes_dir.unwrap_or(self.notes_dir),
            guides_dir: file.guides_dir.unwrap_or(self.guides_dir),
            extension: file.extension.unwrap_or(self.extension),
            index_file: file.index_file.unwrap_or(self.index_file),
            manifest_file: file.manifest_file.unwrap_or(self.manifest_file),
            agents_file: file.agents_file.unwrap_or(self.agents_file),
            description_limit: file.description_limit.unwrap_or(self.description_limit),
            manifest_title: file.manifest.title.unwrap_or(self.manifest_title),
            manifest_summary: file.manifest.summary.unwrap_or(self.manifest_summary),
        }
    }

    /// Parse settings from YAML text over the defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text is not a valid settings document.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: SettingsFile = serde_yaml::from_str(raw)?;
        Ok(Self::default().merge(file))
    }

    /// Load settings from `path`, falling back to defaults.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
            return Self::default();
        }
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to read settings file; ignoring"
                );
                return Self::default();
            }
        };
        match Self::from_yaml(&raw) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "failed to parse settings yaml; ignoring file"
                );
                Self::default()
            }
        }
    }

    /// Manifest preamble derived from these settings.
    #[must_use]
    pub fn manifest_preamble(&self) -> ManifestPreamble {
        ManifestPreamble {
            title: self.manifest_title.clone(),
            summary: self.manifest_summary.clone(),
            start: self.index_file.clone(),
            agent_instructions: self.agents_file.clone(),
        }
    }
}
