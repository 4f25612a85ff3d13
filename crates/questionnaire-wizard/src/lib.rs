//! Questionnaire Wizard
//!
//! Client-side core of the questionnaire:
//! - [`Wizard`]: one-question-at-a-time state machine with review and submit
//! - [`AnswerStore`]: answers in first-answered order
//! - [`SubmissionGateway`]: where a finished answer set is sent
//! - [`GraphqlClient`]: gateway talking to the questionnaire server
//! - [`CatalogSource`]: loads the question catalog from a file or URL
//!
//! # Example
//!
//! ```rust,ignore
//! use questionnaire_wizard::{CatalogSource, GraphqlClient, Wizard, Advance};
//! use questionnaire_model::AnswerValue;
//!
//! let client = GraphqlClient::new("http://127.0.0.1:4000/graphql");
//! let mut wizard = Wizard::new();
//! let catalog = CatalogSource::Url("http://127.0.0.1:4000/questions.json".into())
//!     .load(client.http())
//!     .await?;
//! wizard.load(catalog)?;
//!
//! wizard.record("1", AnswerValue::scalar("John"))?;
//! assert_eq!(wizard.advance()?, Advance::Moved(1));
//! assert_eq!(wizard.advance()?, Advance::Review);
//! wizard.submit_all(&client).await?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod answers;
pub mod error;
pub mod gateway;
mod source;
pub mod state;
mod validation;
mod wizard;

pub use answers::AnswerStore;
pub use error::{GatewayError, SourceError, WizardError};
pub use gateway::{encode_answers, GraphqlClient, SubmissionGateway, DEFAULT_ENDPOINT};
pub use source::{CatalogSource, DEFAULT_CATALOG_URL};
pub use state::{Phase, WizardState};
pub use validation::{validate, ValidationError};
pub use wizard::{Advance, BeginSubmit, ReviewItem, SubmitOutcome, Wizard};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
