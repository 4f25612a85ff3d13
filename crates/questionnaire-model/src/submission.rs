//! Submission records
//!
//! A submission is created once per successful submit and never changes.

use crate::answer::AnswerPair;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use ulid::Ulid;

/// Submission identity
///
/// Fresh identities are ULIDs. Identities read back from an existing data
/// file are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Generate new identity (ULID, sortable by creation time)
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Wrap an existing identity
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SubmissionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable record of one respondent's answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Identity, also the key in the data file
    pub id: SubmissionId,
    /// Creation time
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Pairs exactly as received
    pub answers: Vec<AnswerPair>,
}

impl Submission {
    /// Create submission stamped with the current time
    ///
    /// The timestamp is truncated to milliseconds so the in-memory record
    /// equals what is read back from the data file.
    #[must_use]
    pub fn new(id: SubmissionId, answers: Vec<AnswerPair>) -> Self {
        Self {
            id,
            created_at: Utc::now().trunc_subsecs(3),
            answers,
        }
    }

    /// Creation time as ISO-8601 with millisecond precision
    #[must_use]
    pub fn created_at_iso(&self) -> String {
        iso_millis::format(&self.created_at)
    }
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub(super) fn serialize<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(at))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
