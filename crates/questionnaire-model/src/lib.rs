//! Questionnaire Model
//!
//! Shared data types for every other crate in the workspace:
//! - [`Question`] and [`QuestionType`]: one entry of the catalog
//! - [`Catalog`]: the ordered, checked list of questions
//! - [`AnswerValue`]: scalar or multi-select answer, chosen by question type
//! - [`AnswerPair`] and [`SubmissionPayload`]: the text-only wire form
//! - [`Submission`] and [`SubmissionId`]: the durable server-side record
//!
//! # Example
//!
//! ```rust
//! use questionnaire_model::{AnswerPair, AnswerValue, Catalog};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{ "id": "1", "type": "text", "text": "Name?", "required": true }]"#,
//! )?;
//! assert_eq!(catalog.len(), 1);
//!
//! let pair = AnswerPair::encode("1", &AnswerValue::scalar("John"))?;
//! assert_eq!(pair.value.as_deref(), Some("\"John\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod answer;
mod catalog;
mod error;
mod question;
mod submission;

pub use answer::{AnswerPair, AnswerValue, SubmissionPayload};
pub use catalog::Catalog;
pub use error::{CatalogError, CodecError};
pub use question::{Question, QuestionId, QuestionType};
pub use submission::{Submission, SubmissionId};

/// Message attached to a required question that has no usable answer
pub const REQUIRED_MESSAGE: &str = "This question is required";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
