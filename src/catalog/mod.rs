//! The top-level catalog.
//!
//! Categories are assembled once from the literal content modules and shared
//! for the lifetime of the process.
//!
//! # Layout
//!
//! ```text
//! Catalog
//! └── Category "architecture/audit"
//!     ├── beginner topics      (source order)
//!     ├── intermediate topics  (source order)
//!     └── advanced topics      (source order)
//! ```

pub mod collection;
pub mod validate;

pub use collection::{catalog, Catalog, CatalogStats, CategoryCount, CATALOG_VERSION};
pub use validate::{validate, Allowlist, Issue, ValidationReport};
