//! Configuration for syllabus.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (SYLLABUS_HOME, SYLLABUS_EXPORT_DIR)
//! 2. Config file (.syllabus/config.yaml)
//! 3. Defaults (~/.syllabus)
//!
//! Config file discovery:
//! - Searches current directory and parents for .syllabus/config.yaml
//! - Paths in config file are relative to the project root (parent of .syllabus/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::Allowlist;
use crate::export::ExportFormat;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub export: Option<ExportConfig>,
    #[serde(default)]
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// State directory (relative to project root)
    pub home: Option<String>,
    /// Export directory (relative to project root)
    pub exports: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub format: Option<ExportFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Extra related-topic IDs allowed to dangle
    #[serde(default)]
    pub allow_dangling: Vec<String>,
    /// Ignore the soft-reference allowlist in `validate`
    pub strict: Option<bool>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to syllabus home
    pub home: PathBuf,
    /// Directory snapshots are written to
    pub exports: PathBuf,
    /// Default snapshot format
    pub export_format: ExportFormat,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Validation settings
    pub validation: ValidationSettings,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationSettings {
    pub allow_dangling: Vec<String>,
    pub strict: bool,
}

impl ResolvedConfig {
    /// Built-in allowlist extended with configured IDs
    pub fn allowlist(&self) -> Allowlist {
        Allowlist::builtin().with_ids(self.validation.allow_dangling.iter().cloned())
    }

    /// Default export file path for a format
    pub fn export_path(&self, format: ExportFormat) -> PathBuf {
        self.exports.join(format!("catalog.{}", format.extension()))
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".syllabus").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to a base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge a parsed config file with env overrides
fn resolve(
    config: Option<(&Path, ConfigFile)>,
    default_home: PathBuf,
    env_home: Option<String>,
    env_exports: Option<String>,
) -> ResolvedConfig {
    let (config_file, file) = match config {
        Some((path, file)) => (Some(path.to_path_buf()), Some(file)),
        None => (None, None),
    };

    // Base directory is the parent of .syllabus/ (i.e., grandparent of config.yaml)
    let base_dir = config_file
        .as_deref()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let paths = file.as_ref().map(|f| f.paths.clone()).unwrap_or_default();

    let home = if let Some(env_home) = env_home {
        PathBuf::from(env_home)
    } else if let Some(ref home_path) = paths.home {
        resolve_path(&base_dir, home_path)
    } else {
        default_home
    };

    let exports = if let Some(env_exports) = env_exports {
        PathBuf::from(env_exports)
    } else if let Some(ref exports_path) = paths.exports {
        resolve_path(&base_dir, exports_path)
    } else {
        home.join("exports")
    };

    let export_format = file
        .as_ref()
        .and_then(|f| f.export.as_ref())
        .and_then(|e| e.format)
        .unwrap_or_default();

    let validation = file
        .and_then(|f| f.validation)
        .map(|v| ValidationSettings {
            allow_dangling: v.allow_dangling,
            strict: v.strict.unwrap_or(false),
        })
        .unwrap_or_default();

    ResolvedConfig {
        home,
        exports,
        export_format,
        config_file,
        validation,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".syllabus");

    let config_path = find_config_file();
    let parsed = match config_path {
        Some(ref path) => Some((path.as_path(), load_config_file(path)?)),
        None => None,
    };

    Ok(resolve(
        parsed,
        default_home,
        std::env::var("SYLLABUS_HOME").ok(),
        std::env::var("SYLLABUS_EXPORT_DIR").ok(),
    ))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
