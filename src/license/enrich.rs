use super::manifest::PackageManifest;
use super::PackageRecord;

/// A package record with the descriptive fields shown in the CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: PackageRecord,
    pub description: Option<String>,
    pub author: Option<String>,
    pub contributors: Vec<String>,
    pub homepage: Option<String>,
    pub repository_url: Option<String>,
}

impl EnrichedRecord {
    /// Author followed by contributors, comma-joined. Missing names stay as
    /// empty entries and duplicates are kept.
    pub fn everyone(&self) -> String {
        std::iter::once(self.author.as_deref().unwrap_or(""))
            .chain(self.contributors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Homepage and repository URL, comma-joined, skipping empty ones.
    pub fn urls(&self) -> String {
        [self.homepage.as_deref(), self.repository_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|url| !url.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Merge a package's own manifest into its inventory record.
///
/// Each manifest field wins when present; otherwise the vendor fields from
/// the inventory are used.
pub fn enrich(record: PackageRecord, manifest: Option<&PackageManifest>) -> EnrichedRecord {
    let Some(manifest) = manifest else {
        return EnrichedRecord {
            description: None,
            author: record.vendor_author.clone(),
            contributors: Vec::new(),
            homepage: record.vendor_homepage.clone(),
            repository_url: record.vendor_repository.clone(),
            record,
        };
    };

    let author = match &manifest.author {
        Some(author) => author.display_name().map(str::to_string),
        None => record.vendor_author.clone(),
    };
    let contributors = manifest
        .contributors
        .as_ref()
        .map(|contributors| contributors.display_names())
        .unwrap_or_default();
    let homepage = manifest
        .homepage
        .clone()
        .or_else(|| record.vendor_homepage.clone());
    let repository_url = match &manifest.repository {
        Some(repository) => repository.url().map(str::to_string),
        None => record.vendor_repository.clone(),
    };

    EnrichedRecord {
        description: manifest.description.clone(),
        author,
        contributors,
        homepage,
        repository_url,
        record,
    }
}
