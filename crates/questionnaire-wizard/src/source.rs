//! Catalog sources
//!
//! The catalog is a static JSON document, either a local file or a URL
//! (the server publishes its own at `/questions.json`).

use crate::error::SourceError;
use questionnaire_model::Catalog;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Default catalog URL
pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:4000/questions.json";

/// Location of the catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local file
    File(PathBuf),
    /// HTTP(S) URL
    Url(String),
}

impl CatalogSource {
    /// Fetch and parse the catalog
    ///
    /// # Errors
    /// - `SourceError::Io` if the file cannot be read
    /// - `SourceError::Fetch` if the URL cannot be fetched
    /// - `SourceError::Invalid` if the document is not a valid catalog
    pub async fn load(&self, http: &reqwest::Client) -> Result<Catalog, SourceError> {
        let document = match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            Self::Url(url) => {
                http.get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        let catalog = Catalog::from_json_str(&document)?;
        debug!(source = %self, questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

impl FromStr for CatalogSource {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(Self::Url(raw.to_string()))
        } else {
            Ok(Self::File(PathBuf::from(raw)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}
