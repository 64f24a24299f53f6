//! Catalog loading from a tab-separated resource on disk.

use super::Catalog;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that fail a catalog load as a whole. No partial sequence is
/// ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog resource not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column \"{name}\"")]
    MissingColumn { name: String },

    #[error("row {row}: malformed \"{column}\" field: {value:?}")]
    MalformedField {
        row: usize,
        column: String,
        value: String,
    },
}

/// Read and parse the catalog resource at `path`.
///
/// One read per call; the caller owns retry and timeout policy. Non-fatal
/// findings (duplicate issue numbers) are logged and kept on the returned
/// catalog.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::NotFound {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = Catalog::from_tsv(&text)?;

    if !catalog.problems().is_empty() {
        warn!("Found {} problems:", catalog.problems().len());
        for problem in catalog.problems() {
            warn!("- {:?}", problem);
        }
    }
    info!("Catalog has {} records.", catalog.len());

    Ok(catalog)
}
