use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// The subset of a package's own `package.json` used to enrich CSV rows.
///
/// Fields with an unexpected shape are treated as absent instead of failing
/// the whole manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageManifest {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<PersonField>,
    #[serde(default)]
    pub contributors: Option<ContributorsField>,
    #[serde(default, deserialize_with = "lenient")]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub repository: Option<RepositoryField>,
}

/// `"Jane Doe <jane@example.com>"` or `{ "name": "Jane Doe", ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PersonField {
    PlainString(String),
    NamedObject { name: Option<String> },
}

impl PersonField {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            PersonField::PlainString(name) => Some(name),
            PersonField::NamedObject { name } => name.as_deref(),
        }
    }
}

/// `"github:user/repo"` or `{ "type": "git", "url": "..." }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    PlainString(String),
    UrlObject { url: Option<String> },
}

impl RepositoryField {
    pub fn url(&self) -> Option<&str> {
        match self {
            RepositoryField::PlainString(url) => Some(url),
            RepositoryField::UrlObject { url } => url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContributorsField {
    List(Vec<Value>),
    Other(Value),
}

impl ContributorsField {
    /// Display names in manifest order. A non-list value is passed through
    /// as a single entry.
    pub fn display_names(&self) -> Vec<String> {
        match self {
            ContributorsField::List(entries) => entries
                .iter()
                .map(|entry| {
                    serde_json::from_value::<PersonField>(entry.clone())
                        .ok()
                        .and_then(|person| person.display_name().map(str::to_string))
                        .unwrap_or_default()
                })
                .collect(),
            ContributorsField::Other(Value::String(text)) => vec![text.clone()],
            ContributorsField::Other(other) => vec![other.to_string()],
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Best-effort lookup of a package's manifest. Any failure means "no manifest".
pub trait ManifestSource {
    fn lookup(&self, name: &str) -> Option<PackageManifest>;
}

impl<F> ManifestSource for F
where
    F: Fn(&str) -> Option<PackageManifest>,
{
    fn lookup(&self, name: &str) -> Option<PackageManifest> {
        self(name)
    }
}

/// Reads `<root>/<name>/package.json`, the layout of a `node_modules` tree.
#[derive(Debug, Clone)]
pub struct NodeModules {
    root: PathBuf,
}

impl NodeModules {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// `node_modules` inside the given project directory.
    pub fn in_project(project_dir: &Path) -> Self {
        Self::new(project_dir.join("node_modules"))
    }

    fn manifest_path(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        contained.then(|| self.root.join(relative).join("package.json"))
    }
}

impl ManifestSource for NodeModules {
    fn lookup(&self, name: &str) -> Option<PackageManifest> {
        let path = self.manifest_path(name)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(package = name, path = %path.display(), error = %e, "no package manifest");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!(package = name, path = %path.display(), error = %e, "ignoring malformed package manifest");
                None
            }
        }
    }
}
