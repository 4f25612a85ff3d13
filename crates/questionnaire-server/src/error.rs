//! Server startup errors

use questionnaire_model::CatalogError;
use questionnaire_store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing the server up
#[derive(Debug, Error)]
pub enum ServerError {
    /// Submission store could not be opened
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        /// Catalog path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not a valid catalog
    #[error("invalid catalog {path}: {source}")]
    Catalog {
        /// Catalog path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: CatalogError,
    },

    /// Listen address could not be bound
    #[error("failed to bind: {0}")]
    Bind(#[from] warp::Error),
}
