use indexmap::IndexMap;
use std::io::Write;
use crate::error::AuditError;
use crate::inventory::InventoryTable;
use crate::license::{enrich, EnrichedRecord, ManifestSource, PackageRecord};
use crate::output::{format_counts, format_csv_row, CSV_HEADER};
use crate::policy::{Classification, Policy, Violation};

/// What the run prints besides violations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Print license counts on success
    pub counts: bool,
    /// Print a CSV line per reported package
    pub csv: bool,
}

/// Result of a clean run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSummary {
    pub counts: IndexMap<String, usize>,
    pub reported: usize,
    pub excluded: usize,
}

/// Accumulates counts, CSV lines and violations for one run.
///
/// `out` receives the CSV and counts; `diagnostics` receives one line per
/// violation as it is found.
pub struct Reporter<O: Write, D: Write> {
    out: O,
    diagnostics: D,
    options: AuditOptions,
    summary: AuditSummary,
    violations: Vec<Violation>,
}

impl<O: Write, D: Write> Reporter<O, D> {
    /// Writes the CSV header right away when CSV output is enabled.
    pub fn new(mut out: O, diagnostics: D, options: AuditOptions) -> Result<Self, AuditError> {
        if options.csv {
            writeln!(out, "{}", CSV_HEADER)?;
        }

        Ok(Self {
            out,
            diagnostics,
            options,
            summary: AuditSummary::default(),
            violations: Vec::new(),
        })
    }

    pub fn csv_enabled(&self) -> bool {
        self.options.csv
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Record one classified package. Violating packages are still counted.
    pub fn observe(&mut self, record: &PackageRecord, classification: Classification) -> Result<(), AuditError> {
        match classification {
            Classification::Excluded => {
                self.summary.excluded += 1;
                return Ok(());
            }
            Classification::Violating(violation) => {
                writeln!(self.diagnostics, "{}", violation)?;
                self.violations.push(violation);
            }
            Classification::Accepted => {}
        }

        self.summary.reported += 1;
        *self.summary.counts.entry(record.license().to_string()).or_insert(0) += 1;
        Ok(())
    }

    pub fn write_row(&mut self, record: &EnrichedRecord) -> Result<(), AuditError> {
        writeln!(self.out, "{}", format_csv_row(record))?;
        Ok(())
    }

    /// Fail with the unapproved license ids if anything violated, otherwise
    /// print the counts when asked to.
    pub fn finish(mut self) -> Result<AuditSummary, AuditError> {
        if !self.violations.is_empty() {
            let mut licenses: Vec<String> = Vec::new();
            for violation in &self.violations {
                if !licenses.contains(&violation.license_id) {
                    licenses.push(violation.license_id.clone());
                }
            }
            return Err(AuditError::Unapproved { licenses });
        }

        if self.options.counts {
            writeln!(self.out, "{}", format_counts(&self.summary.counts))?;
        }
        self.out.flush()?;

        Ok(self.summary)
    }
}

/// Classify every row of the table in order and report on it.
///
/// All rows are scanned before the outcome is decided, so every violation
/// is listed. Package manifests are only looked up for CSV lines.
pub fn run_audit<O, D>(
    table: &InventoryTable,
    policy: &Policy,
    options: AuditOptions,
    manifests: &dyn ManifestSource,
    out: O,
    diagnostics: D,
) -> Result<AuditSummary, AuditError>
where
    O: Write,
    D: Write,
{
    let mut reporter = Reporter::new(out, diagnostics, options)?;

    for cells in table.rows() {
        let record = PackageRecord::from_row(cells);
        let classification = policy.classify(&record);
        tracing::debug!(package = %record.name, license = record.license(), outcome = ?classification, "classified");

        let reported = classification.is_reported();
        reporter.observe(&record, classification)?;

        if reported && reporter.csv_enabled() {
            let manifest = manifests.lookup(&record.name);
            reporter.write_row(&enrich(record, manifest.as_ref()))?;
        }
    }

    tracing::info!(
        rows = table.body.len(),
        violations = reporter.violations().len(),
        "license audit complete"
    );

    reporter.finish()
}
