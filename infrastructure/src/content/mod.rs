//! Content adapters — the built-in catalog, devotional library, and packs.

pub mod books;
pub mod catalog;
pub mod library;
pub mod pack;
pub mod reflection;
pub mod themes;

pub use catalog::BuiltinCatalog;
pub use library::BuiltinLibrary;
pub use pack::{LoadedPack, PackError};
