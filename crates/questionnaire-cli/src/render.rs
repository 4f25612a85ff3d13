//! Screens

use questionnaire_model::{AnswerPair, Question, Submission};
use questionnaire_wizard::{ReviewItem, Wizard};
use std::io::{self, Write};

/// Shown once the server has stored the submission
pub const THANK_YOU: &str = "Thank you for submitting the questionnaire!";

/// Question screen: progress, text, requiredness, options, current answer
pub fn question<W: Write>(out: &mut W, wizard: &Wizard, question: &Question) -> io::Result<()> {
    if let Some((position, total)) = wizard.progress() {
        writeln!(out)?;
        writeln!(out, "Question {position} of {total}")?;
    }
    let requirement = if question.required { "required" } else { "optional" };
    writeln!(out, "{} ({requirement})", question.text)?;

    for (i, option) in question.options().iter().enumerate() {
        writeln!(out, "  {}. {option}", i + 1)?;
    }
    if question.kind.is_multi_valued() {
        writeln!(out, "  (comma separated, {} to clear)", crate::input::CLEAR)?;
    }

    if let Some(answer) = wizard.answer(question.id.as_str()) {
        writeln!(out, "Current answer: {}", answer.display())?;
    }
    if let Some(message) = wizard.error(question.id.as_str()) {
        writeln!(out, "! {message}")?;
    }
    if !wizard.is_first() {
        writeln!(out, "({} for the previous question)", crate::input::BACK)?;
    }
    if wizard.is_last() {
        writeln!(out, "(last question, the review comes next)")?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// Review screen listing every question with its answer
pub fn review<W: Write>(
    out: &mut W,
    items: &[ReviewItem<'_>],
    failure: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Review your answers")?;
    writeln!(out, "Please review your answers before submitting the questionnaire.")?;
    for item in items {
        let answer = item
            .answer
            .map_or_else(|| "(no answer)".to_string(), |a| a.display());
        writeln!(out, "- {}: {answer}", item.question.text)?;
        if let Some(message) = item.error {
            writeln!(out, "  ! {message}")?;
        }
    }
    if let Some(reason) = failure {
        writeln!(out, "Submission failed: {reason}")?;
    }
    write!(
        out,
        "Type '{}' to send, '{}' to go back, '{}' to leave: ",
        crate::input::SUBMIT,
        crate::input::BACK,
        crate::input::QUIT
    )?;
    out.flush()
}

/// Stored submissions with their answers decoded
pub fn submissions<W: Write>(out: &mut W, submissions: &[Submission]) -> io::Result<()> {
    if submissions.is_empty() {
        writeln!(out, "No submissions yet.")?;
    }
    for submission in submissions {
        writeln!(out, "{}  {}", submission.id, submission.created_at_iso())?;
        for answer in &submission.answers {
            writeln!(out, "  {}: {}", answer.question_id, answer_text(answer))?;
        }
    }
    Ok(())
}

/// Decoded answer; the raw wire text when it does not decode
fn answer_text(answer: &AnswerPair) -> String {
    match answer.decode() {
        Ok(Some(value)) => value.display(),
        Ok(None) => "(no answer)".to_string(),
        Err(_) => answer.value.clone().unwrap_or_default(),
    }
}
