//! Questionnaire CLI
//!
//! Terminal front end for the questionnaire wizard. One question per
//! screen; `:back`, `:quit` and `:clear` work on every question screen,
//! and the review screen takes `submit`.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod input;
pub mod render;
mod session;

pub use error::SessionError;
pub use input::{parse_answer, Command, InputError};
pub use render::THANK_YOU;
pub use session::{Session, SessionEnd};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
