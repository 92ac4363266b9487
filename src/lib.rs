pub mod audit;
pub mod config;
pub mod error;
pub mod inventory;
pub mod license;
pub mod output;
pub mod policy;

// Re-export main types for easy access
pub use audit::{run_audit, AuditOptions, AuditSummary, Reporter};
pub use error::{AuditError, InventoryError};
pub use inventory::{parse_inventory, read_inventory, InventoryTable};
pub use license::{enrich, EnrichedRecord, ManifestSource, NodeModules, PackageManifest, PackageRecord};
pub use policy::{Classification, Policy, PolicySettings, Violation};
