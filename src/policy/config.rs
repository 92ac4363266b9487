use std::collections::BTreeSet;

/// Policy inputs as gathered from the command line and the project manifest,
/// before they are frozen into a [`Policy`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolicySettings {
    /// Approved SPDX identifiers
    pub approve: Vec<String>,
    /// Package names skipped entirely
    pub exclude: Vec<String>,
    /// Package name prefixes skipped entirely
    pub exclude_prefix: Vec<String>,
    /// Fail on licenses outside `approve`
    pub verify: bool,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            approve: Vec::new(),
            exclude: Vec::new(),
            exclude_prefix: Vec::new(),
            verify: true,
        }
    }
}

impl PolicySettings {
    /// Append another source's lists after ours. `verify` is left untouched.
    pub fn extend(&mut self, other: PolicySettings) {
        self.approve.extend(other.approve);
        self.exclude.extend(other.exclude);
        self.exclude_prefix.extend(other.exclude_prefix);
    }
}

/// The license policy for one run. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub(crate) approved_licenses: BTreeSet<String>,
    pub(crate) excluded_names: BTreeSet<String>,
    pub(crate) excluded_prefixes: Vec<String>,
    pub(crate) verify: bool,
}

impl Default for Policy {
    fn default() -> Self {
        PolicySettings::default().into()
    }
}

impl From<PolicySettings> for Policy {
    fn from(settings: PolicySettings) -> Self {
        let mut excluded_prefixes = Vec::with_capacity(settings.exclude_prefix.len());
        for prefix in settings.exclude_prefix {
            if !excluded_prefixes.contains(&prefix) {
                excluded_prefixes.push(prefix);
            }
        }

        Self {
            approved_licenses: settings.approve.into_iter().collect(),
            excluded_names: settings.exclude.into_iter().collect(),
            excluded_prefixes,
            verify: settings.verify,
        }
    }
}

impl Policy {
    pub fn approved_licenses(&self) -> impl Iterator<Item = &str> {
        self.approved_licenses.iter().map(String::as_str)
    }

    pub fn excluded_names(&self) -> impl Iterator<Item = &str> {
        self.excluded_names.iter().map(String::as_str)
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }
}
