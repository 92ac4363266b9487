pub mod config;
pub mod matcher;
pub mod checker;

// Re-export main types
pub use config::{Policy, PolicySettings};
pub use checker::{Classification, Violation};
