use super::config::Policy;
use crate::license::PackageRecord;

/// A package whose license is not on the approved list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub name: String,
    pub version: String,
    pub license_id: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}@{}\" has unapproved license: \"{}\"",
            self.name, self.version, self.license_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Accepted,
    Excluded,
    Violating(Violation),
}

impl Classification {
    /// Excluded packages take no part in counts, CSV or violations.
    pub fn is_reported(&self) -> bool {
        !matches!(self, Classification::Excluded)
    }
}

impl Policy {
    /// Exclusion wins over verification; with verification off every
    /// remaining package is accepted.
    pub fn classify(&self, record: &PackageRecord) -> Classification {
        if self.is_excluded(&record.name) {
            return Classification::Excluded;
        }

        if self.requires_verification() && !self.is_approved(record.license()) {
            return Classification::Violating(Violation {
                name: record.name.clone(),
                version: record.version().to_string(),
                license_id: record.license().to_string(),
            });
        }

        Classification::Accepted
    }
}
