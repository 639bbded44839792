//! Content directory scanning.
//!
//! Stage 1 of the catalog pipeline. Reads the collection files and the
//! optional `config.toml` from the content root and produces a
//! [`ScanManifest`] holding each collection as raw JSON.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml          # Optional config overrides
//! ├── comparisons.json     # [ {slug, category, meta, ...}, ... ]
//! ├── compliance.json
//! ├── glossary.json
//! ├── platforms.json
//! └── templates.json
//! ```
//!
//! A collection whose file is absent is simply not part of the catalog.
//! Other files in the directory are ignored.
//!
//! Scanning only checks that each file is JSON. Whether it has the right
//! shape is the job of [`validate`](crate::validate), which needs the raw
//! value to report every defect instead of failing on the first one.

use crate::config::{self, CatalogConfig};
use crate::types::Category;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("No collection files (comparisons.json, compliance.json, ...) in {0}")]
    NoCollections(PathBuf),
}

/// Where a collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSource {
    /// File name relative to the content root.
    pub file: String,
    /// SHA-256 of the file contents, hex encoded.
    pub fingerprint: String,
    pub size_bytes: usize,
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone)]
pub struct ScanManifest {
    pub root: PathBuf,
    pub config: CatalogConfig,
    /// Raw JSON of each present collection.
    pub collections: BTreeMap<Category, Value>,
    pub sources: BTreeMap<Category, CollectionSource>,
}

impl ScanManifest {
    /// Number of elements in a collection's top-level array (0 when the
    /// collection is absent or not an array).
    pub fn record_count(&self, category: Category) -> usize {
        self.collections
            .get(&category)
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

pub fn scan(root: &Path) -> Result<ScanManifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    // Uses defaults if config.toml doesn't exist
    let config = config::load_config(root)?;

    let mut collections = BTreeMap::new();
    let mut sources = BTreeMap::new();
    for category in Category::ALL {
        let file = category.file_name();
        let path = root.join(&file);
        if !path.is_file() {
            tracing::debug!(category = %category, "no collection file");
            continue;
        }
        let bytes = fs::read(&path)?;
        let records: Value =
            serde_json::from_slice(&bytes).map_err(|source| ScanError::Json {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            category = %category,
            file = %file,
            bytes = bytes.len(),
            "loaded collection"
        );
        sources.insert(
            category,
            CollectionSource {
                file,
                fingerprint: fingerprint(&bytes),
                size_bytes: bytes.len(),
            },
        );
        collections.insert(category, records);
    }

    if collections.is_empty() {
        return Err(ScanError::NoCollections(root.to_path_buf()));
    }

    Ok(ScanManifest {
        root: root.to_path_buf(),
        config,
        collections,
        sources,
    })
}

/// SHA-256 of raw bytes, returned as a hex string.
fn fingerprint(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
