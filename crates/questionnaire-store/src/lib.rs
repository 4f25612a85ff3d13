//! Questionnaire Store
//!
//! Owns the server-side mapping of submission identity to [`Submission`]
//! together with exclusive write access to its JSON data file.
//!
//! - [`SubmissionStore::open`]: load the file, or start empty when it is missing
//! - [`SubmissionStore::list`]: all submissions in insertion order
//! - [`SubmissionStore::append`]: record a submission and rewrite the file
//!
//! # Example
//!
//! ```rust,ignore
//! use questionnaire_model::AnswerPair;
//! use questionnaire_store::SubmissionStore;
//!
//! let store = SubmissionStore::open("questionnaire-data.json").await?;
//! let id = store.append(vec![AnswerPair::new("1", Some("\"John\"".into()))]).await?;
//! assert!(store.get(id.as_str()).await.is_some());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod store;

pub use error::StoreError;
pub use store::{SharedStore, SubmissionStore};

/// Default data file name
pub const DEFAULT_DATA_FILE: &str = "questionnaire-data.json";
