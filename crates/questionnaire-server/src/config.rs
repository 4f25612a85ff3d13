//! Server configuration

use questionnaire_store::DEFAULT_DATA_FILE;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Submission data file
    pub data_file: PathBuf,
    /// Catalog served at `/questions.json` and by the `questions` query
    pub catalog: Option<PathBuf>,
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// With data file
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            catalog: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_endpoint() {
        let config = ServerConfig::new();
        assert_eq!(config.bind.to_string(), "127.0.0.1:4000");
        assert_eq!(config.data_file, PathBuf::from("questionnaire-data.json"));
        assert!(config.catalog.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ServerConfig::new()
            .with_bind(SocketAddr::from(([0, 0, 0, 0], 8080)))
            .with_data_file("/var/lib/q/data.json")
            .with_catalog("questions.json");
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.catalog, Some(PathBuf::from("questions.json")));
    }
}
