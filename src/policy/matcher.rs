use super::config::Policy;

impl Policy {
    /// An empty approved set rejects nothing.
    pub fn is_approved(&self, license_id: &str) -> bool {
        self.approved_licenses.is_empty() || self.approved_licenses.contains(license_id)
    }

    /// Exact name match or any configured prefix.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.contains(name)
            || self
                .excluded_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }

    pub fn requires_verification(&self) -> bool {
        self.verify
    }
}
