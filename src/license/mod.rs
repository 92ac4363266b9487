pub mod enrich;
pub mod manifest;

pub use enrich::{enrich, EnrichedRecord};
pub use manifest::{ManifestSource, NodeModules, PackageManifest};

/// One dependency as reported by the inventory table.
///
/// Optional fields are `None` when the column is missing or carries the
/// `"unknown"` sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageRecord {
    pub name: String,
    pub version: Option<String>,
    pub license_id: Option<String>,
    pub vendor_author: Option<String>,
    pub vendor_homepage: Option<String>,
    pub vendor_repository: Option<String>,
}

impl PackageRecord {
    /// Build a record from `(column, value)` pairs of one inventory row.
    pub fn from_row<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = PackageRecord::default();

        for (column, raw) in cells {
            let Some(value) = decode_value(raw) else {
                continue;
            };
            match column {
                "Name" => record.name = value,
                "Version" => record.version = Some(value),
                "License" => record.license_id = Some(value),
                "VendorName" => record.vendor_author = Some(value),
                "VendorURL" => record.vendor_homepage = Some(value),
                "URL" => record.vendor_repository = Some(value),
                _ => {}
            }
        }

        record
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// The declared license id, empty when the inventory had none.
    pub fn license(&self) -> &str {
        self.license_id.as_deref().unwrap_or("")
    }
}

/// Drop the inventory tool's `unknown` placeholder (any casing, Unicode-aware).
fn decode_value(raw: &str) -> Option<String> {
    if raw.to_lowercase() == "unknown" {
        None
    } else {
        Some(raw.to_string())
    }
}
