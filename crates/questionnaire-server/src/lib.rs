//! Questionnaire Server
//!
//! GraphQL service over the submission store:
//! - `submitQuestionnaire` mutation appends a submission
//! - `submissions` query lists everything stored
//! - `questions` query and `/questions.json` serve the catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use questionnaire_server::{serve, ServerConfig};
//!
//! let config = ServerConfig::new().with_data_file("data.json");
//! serve(&config, async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
pub mod error;
mod routes;
pub mod schema;
mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::ServerError;
pub use routes::routes;
pub use schema::{build_schema, QuestionnaireSchema};
pub use server::{bind, load_catalog, serve};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
