//! Product files handed to `add` and `buy-now`.
//!
//! A product file carries the same record a product page supplies:
//!
//! ```yaml
//! title: The Summit Beanie
//! sku: WDR-SUMMIT-01
//! price: 45.00
//! options: [Size]
//! optionValues:
//!   Size: [S, M, L]
//! ```
//!
//! Files ending in `.yaml` / `.yml` are read as YAML, everything else as JSON.

use std::path::{Path, PathBuf};

use thiserror::Error;
use weekenders_core::Product;

/// Errors raised while loading a product file.
#[derive(Debug, Error)]
pub enum ProductFileError {
    #[error("failed to read product file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON product in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid YAML product in {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Load and parse a product file.
///
/// # Errors
///
/// Returns `ProductFileError` if the file is unreadable or not a product.
pub fn load(path: &Path) -> Result<Product, ProductFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProductFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

fn parse(path: &Path, content: &str) -> Result<Product, ProductFileError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(content).map_err(|source| ProductFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(content).map_err(|source| ProductFileError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
