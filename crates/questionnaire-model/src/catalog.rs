//! Question catalog
//!
//! The ordered list of questions shown to a respondent. Parsed once per
//! session and never mutated afterwards.

use crate::error::CatalogError;
use crate::question::Question;
use serde::Serialize;
use std::collections::HashSet;

/// Checked, ordered list of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build catalog from questions
    ///
    /// # Errors
    /// - `CatalogError::Empty` if there are no questions
    /// - `CatalogError::DuplicateId` if two questions share an id
    /// - `CatalogError::MissingOptions` if a selection question has no options
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        Self::check(&questions)?;
        Ok(Self { questions })
    }

    fn check(questions: &[Question]) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for q in questions {
            if !seen.insert(q.id.as_str()) {
                return Err(CatalogError::DuplicateId(q.id.clone()));
            }
            if q.kind.is_selection() && q.options().is_empty() {
                return Err(CatalogError::MissingOptions {
                    id: q.id.clone(),
                    kind: q.kind,
                });
            }
        }
        Ok(())
    }

    /// Parse catalog document (JSON array of questions)
    ///
    /// # Errors
    /// - `CatalogError::Malformed` if the document does not parse
    /// - any error from [`Catalog::new`]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Questions in display order
    #[inline]
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at position
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question by identity
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    /// Number of questions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::QuestionType;

    const SAMPLE: &str = r#"[
        { "id": "1", "type": "text", "text": "What is your name?", "required": true },
        { "id": "2", "type": "number", "text": "How old are you?", "required": false },
        { "id": "3", "type": "radio", "text": "Tea or coffee?", "required": true, "options": ["Tea", "Coffee"] }
    ]"#;

    #[test]
    fn parses_in_document_order() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let ids: Vec<_> = catalog.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(catalog.find("3").unwrap().options(), ["Tea", "Coffee"]);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::from_json_str("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Question::new("1", "a", QuestionType::Text),
            Question::new("1", "b", QuestionType::Text),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "1"));
    }

    #[test]
    fn rejects_selection_without_options() {
        let err =
            Catalog::new(vec![Question::new("c", "Pick", QuestionType::Dropdown)]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingOptions { .. }));
    }

    #[test]
    fn rejects_unknown_type_tag() {
        let err = Catalog::from_json_str(r#"[{ "id": "1", "type": "slider", "text": "x" }]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn serializes_back_to_array() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["type"], "radio");
    }
}
