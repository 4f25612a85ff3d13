//! Startup: open the store, load the catalog, bind

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::routes::routes;
use crate::schema::build_schema;
use questionnaire_model::Catalog;
use questionnaire_store::SubmissionStore;
use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Read and check a catalog file.
///
/// # Errors
///
/// Returns [`ServerError::CatalogIo`] or [`ServerError::Catalog`].
pub async fn load_catalog(path: &Path) -> Result<Catalog, ServerError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ServerError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
    Catalog::from_json_str(&raw).map_err(|source| ServerError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Bind the server; returns the bound address and the future that serves
/// until `shutdown` resolves.
///
/// # Errors
///
/// Fails when the store or catalog cannot be loaded, or the address is taken.
pub async fn bind(
    config: &ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, impl Future<Output = ()>), ServerError> {
    let store = SubmissionStore::open_shared(&config.data_file).await?;
    info!(
        path = %store.path().display(),
        submissions = store.len().await,
        "submission store opened"
    );

    let catalog = match &config.catalog {
        Some(path) => {
            let catalog = load_catalog(path).await?;
            info!(path = %path.display(), questions = catalog.len(), "catalog loaded");
            Some(catalog)
        }
        None => None,
    };

    let schema = build_schema(store, catalog.clone());
    let filter = routes(schema, catalog.map(Arc::new));
    let (addr, server) =
        warp::serve(filter).try_bind_with_graceful_shutdown(config.bind, shutdown)?;
    Ok((addr, server))
}

/// Bind and serve until `shutdown` resolves.
///
/// # Errors
///
/// See [`bind`].
pub async fn serve(
    config: &ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let (addr, server) = bind(config, shutdown).await?;
    info!("server ready at http://{addr}/graphql");
    server.await;
    info!("server stopped");
    Ok(())
}
