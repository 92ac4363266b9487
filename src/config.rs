use serde::Deserialize;
use std::fs;
use std::path::Path;
use crate::policy::PolicySettings;

/// The `manylicenses` key of the project's `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Approved SPDX identifiers
    #[serde(default)]
    pub approve: Option<StringList>,
    /// Excluded package names
    #[serde(default)]
    pub exclude: Option<StringList>,
    /// Excluded package name prefixes
    #[serde(default)]
    pub exclude_prefix: Option<StringList>,
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    One(String),
    Many(Vec<String>),
}

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            // an empty string means "nothing", not an empty entry
            StringList::One(value) if value.is_empty() => Vec::new(),
            StringList::One(value) => vec![value],
            StringList::Many(values) => values,
        }
    }
}

impl Config {
    /// The configured lists, with verification left at its default.
    pub fn into_settings(self) -> PolicySettings {
        PolicySettings {
            approve: self.approve.map(StringList::into_vec).unwrap_or_default(),
            exclude: self.exclude.map(StringList::into_vec).unwrap_or_default(),
            exclude_prefix: self.exclude_prefix.map(StringList::into_vec).unwrap_or_default(),
            ..PolicySettings::default()
        }
    }
}

#[derive(Deserialize)]
struct ProjectManifest {
    #[serde(default)]
    manylicenses: Option<Config>,
}

/// Load configuration from `<project_dir>/package.json`.
///
/// A missing file or key yields `None`. An unreadable or malformed file is
/// ignored with a warning so the command line alone decides the policy.
pub fn load_config(project_dir: &Path) -> Option<Config> {
    let manifest_path = project_dir.join("package.json");

    if !manifest_path.exists() {
        tracing::debug!(path = %manifest_path.display(), "no project manifest");
        return None;
    }

    let content = match fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %manifest_path.display(), error = %e, "failed to read project manifest, ignoring it");
            return None;
        }
    };

    match serde_json::from_str::<ProjectManifest>(&content) {
        Ok(manifest) => manifest.manylicenses,
        Err(e) => {
            tracing::warn!(path = %manifest_path.display(), error = %e, "failed to parse project manifest, ignoring it");
            None
        }
    }
}
