//! Line input to wizard commands

use questionnaire_model::{AnswerValue, Question, QuestionType};
use thiserror::Error;

/// Go back one question
pub const BACK: &str = ":back";
/// Leave without submitting
pub const QUIT: &str = ":quit";
/// Erase the current answer
pub const CLEAR: &str = ":clear";
/// Send the answers from the review screen
pub const SUBMIT: &str = "submit";

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the answer, then advance
    Answer(AnswerValue),
    /// Advance with the answer as it stands
    Keep,
    /// Previous question
    Back,
    /// Stop the session
    Quit,
}

/// Input that does not fit the question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Number questions take a finite decimal
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// Choice not among the options, by index or by text
    #[error("'{0}' is not one of the options")]
    UnknownOption(String),
}

/// Interpret one line typed on a question screen.
///
/// Selections accept a 1-based option number or the option text
/// (case-insensitive); checkbox answers are comma separated.
///
/// # Errors
/// [`InputError`] when the line cannot be an answer to `question`.
pub fn parse_answer(question: &Question, line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    match line {
        "" => return Ok(Command::Keep),
        BACK => return Ok(Command::Back),
        QUIT => return Ok(Command::Quit),
        CLEAR => return Ok(Command::Answer(empty_answer(question.kind))),
        _ => {}
    }

    let value = match question.kind {
        QuestionType::Text | QuestionType::LongText => AnswerValue::scalar(line),
        QuestionType::Number => match line.parse::<f64>() {
            Ok(n) if n.is_finite() => AnswerValue::scalar(line),
            _ => return Err(InputError::NotANumber(line.to_string())),
        },
        QuestionType::Dropdown | QuestionType::Radio => {
            AnswerValue::scalar(pick(question.options(), line)?)
        }
        QuestionType::Checkbox => {
            let mut picked: Vec<String> = Vec::new();
            for part in line.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                let option = pick(question.options(), part)?;
                if !picked.contains(&option) {
                    picked.push(option);
                }
            }
            AnswerValue::MultiSelect(picked)
        }
    };
    Ok(Command::Answer(value))
}

fn empty_answer(kind: QuestionType) -> AnswerValue {
    if kind.is_multi_valued() {
        AnswerValue::MultiSelect(Vec::new())
    } else {
        AnswerValue::scalar("")
    }
}

fn pick(options: &[String], choice: &str) -> Result<String, InputError> {
    if let Ok(n) = choice.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
            return Ok(option.clone());
        }
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(choice))
        .cloned()
        .ok_or_else(|| InputError::UnknownOption(choice.to_string()))
}
