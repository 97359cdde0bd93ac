//! Export snapshots of the catalog.
//!
//! A snapshot wraps the catalog with a format version, an export timestamp
//! and a SHA-256 fingerprint of the catalog's compact JSON encoding. Reading a
//! snapshot recomputes the fingerprint and rejects it on mismatch.
//!
//! # Formats
//!
//! | Format | Extensions      |
//! |--------|-----------------|
//! | JSON   | `.json`         |
//! | YAML   | `.yaml`, `.yml` |

pub mod format;
pub mod snapshot;

pub use format::ExportFormat;
pub use snapshot::{fingerprint, from_str, read, to_string, write, ExportError, Snapshot, SNAPSHOT_VERSION};
