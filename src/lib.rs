//! syllabus - curated catalog of software architecture and computer science topics
//!
//! Topics are hand-written literals, grouped by subject and difficulty tier,
//! and assembled once into a read-only catalog.
//!
//! # Architecture
//!
//! - Each subject declares three lists: beginner, intermediate, advanced
//! - A subject's category is the concatenation of those lists, in that order
//! - The catalog is the concatenation of every subject's category
//!
//! # Modules
//!
//! - `content`: The literal topic data, one module per subject and tier
//! - `domain`: Data structures (Topic, Category, Difficulty)
//! - `catalog`: Assembly, queries and hygiene checks
//! - `export`: JSON/YAML snapshots with fingerprints
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! syllabus categories
//! syllabus list --category computer-science/operating-systems --difficulty advanced
//! syllabus show os-virtual-memory --examples
//!
//! # Check and export
//! syllabus validate
//! syllabus export --format yaml --output dist/catalog.yaml
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod export;

// Re-export main types at crate root for convenience
pub use catalog::{catalog, validate, Allowlist, Catalog, CatalogStats, CategoryCount, Issue, ValidationReport};
pub use domain::{Category, CodeExample, Difficulty, Topic, TopicId};
pub use export::{ExportError, ExportFormat, Snapshot};
