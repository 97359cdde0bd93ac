//! Snapshot encoding, decoding and file I/O.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::fs;
use tracing::info;

use super::format::ExportFormat;
use crate::catalog::Catalog;

/// Snapshot envelope version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from exporting or importing snapshots
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown export format: '{0}' (expected json or yaml)")]
    UnknownFormat(String),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Fingerprint mismatch: snapshot says {expected}, content hashes to {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An exported catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Envelope format version
    pub format_version: u32,

    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// Hex SHA-256 of the catalog's compact JSON
    pub fingerprint: String,

    /// The catalog itself
    pub catalog: Catalog,
}

impl Snapshot {
    /// Take a snapshot of a catalog
    pub fn new(catalog: &Catalog) -> Result<Self, ExportError> {
        Ok(Self {
            format_version: SNAPSHOT_VERSION,
            exported_at: Utc::now(),
            fingerprint: fingerprint(catalog)?,
            catalog: catalog.clone(),
        })
    }

    /// Check version and fingerprint
    pub fn verify(&self) -> Result<(), ExportError> {
        if self.format_version != SNAPSHOT_VERSION {
            return Err(ExportError::UnsupportedVersion {
                found: self.format_version,
                expected: SNAPSHOT_VERSION,
            });
        }

        let actual = fingerprint(&self.catalog)?;
        if actual != self.fingerprint {
            return Err(ExportError::FingerprintMismatch {
                expected: self.fingerprint.clone(),
                actual,
            });
        }

        Ok(())
    }
}

/// Hex SHA-256 of the catalog's compact JSON encoding.
///
/// Field and list order are fixed by the types, so equal catalogs hash equal.
pub fn fingerprint(catalog: &Catalog) -> Result<String, ExportError> {
    let bytes = serde_json::to_vec(catalog)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Encode a catalog snapshot
pub fn to_string(catalog: &Catalog, format: ExportFormat) -> Result<String, ExportError> {
    let snapshot = Snapshot::new(catalog)?;
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&snapshot)?,
        ExportFormat::Yaml => serde_yaml::to_string(&snapshot)?,
    };
    Ok(text)
}

/// Decode and verify a snapshot, returning its catalog
pub fn from_str(text: &str, format: ExportFormat) -> Result<Catalog, ExportError> {
    let snapshot: Snapshot = match format {
        ExportFormat::Json => serde_json::from_str(text)?,
        ExportFormat::Yaml => serde_yaml::from_str(text)?,
    };
    snapshot.verify()?;
    Ok(snapshot.catalog)
}

/// Write a snapshot to disk, creating parent directories
pub async fn write(catalog: &Catalog, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
    }

    let text = to_string(catalog, format)?;
    fs::write(path, text).await.map_err(io_err)?;

    info!(path = %path.display(), %format, topics = catalog.len(), "Catalog exported");
    Ok(())
}

/// Read a snapshot from disk; the format is taken from the file extension
pub async fn read(path: &Path) -> Result<Catalog, ExportError> {
    let format = ExportFormat::from_path(path)?;
    let text = fs::read_to_string(path).await.map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = from_str(&text, format)?;
    info!(path = %path.display(), %format, topics = catalog.len(), "Catalog imported");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, Topic};

    fn small_catalog() -> Catalog {
        Catalog::from_categories([Category::new("x/y", "Y").with_topic(
            Topic::new("a", "A", Difficulty::Beginner).with_description("first"),
        )])
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = fingerprint(&small_catalog()).unwrap();
        let b = fingerprint(&small_catalog()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let mut changed = small_catalog();
        changed.categories[0].topics[0].title = "B".to_string();
        assert_ne!(
            fingerprint(&small_catalog()).unwrap(),
            fingerprint(&changed).unwrap()
        );
    }

    #[test]
    fn test_tampered_snapshot_is_rejected() {
        let text = to_string(&small_catalog(), ExportFormat::Json).unwrap();
        let tampered = text.replace("\"first\"", "\"edited\"");

        let result = from_str(&tampered, ExportFormat::Json);
        assert!(matches!(result, Err(ExportError::FingerprintMismatch { .. })));
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::new(&small_catalog()).unwrap();
        snapshot.format_version = 99;

        match snapshot.verify() {
            Err(ExportError::UnsupportedVersion { found, expected }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, SNAPSHOT_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }
}
