//! Infrastructure layer for selah
//!
//! This crate contains the adapters behind the application ports: the
//! built-in content catalog and devotional library, the TOML question-pack
//! loader, and the layered configuration loader.

pub mod config;
pub mod content;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use content::{BuiltinCatalog, BuiltinLibrary, LoadedPack, PackError};
