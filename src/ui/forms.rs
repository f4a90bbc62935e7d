//! Request/validate/retry prompt loops. Every loop keeps asking for the same
//! field until the validator accepts it; only a closed input stream breaks out.

use anyhow::Result;
use tracing::debug;

use crate::models::StudentRecord;
use crate::roster::{
    parse_count, parse_identifier, parse_score, validate_name, EntryPass, ValidationError,
};

use super::terminal::{Console, MessageKind};

/// Ask for a start-up count in `1..=max`.
pub(crate) fn prompt_count(console: &mut dyn Console, label: &str, max: usize) -> Result<usize> {
    loop {
        let raw = console.ask(&format!("Enter number of {label} (1-{max}): "))?;
        match parse_count(&raw, max) {
            Ok(count) => return Ok(count),
            Err(ValidationError::NotANumber) => {
                console.message(MessageKind::Error, "Invalid input.")?;
            }
            Err(err) => reject(console, label, &err)?,
        }
    }
}

/// Yes/no question; only an answer starting with `y` or `Y` confirms.
pub(crate) fn confirm(console: &mut dyn Console, question: &str) -> Result<bool> {
    let answer = console.ask(&format!("{question} (y/n): "))?;
    Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
}

pub(crate) fn prompt_identifier(console: &mut dyn Console, pass: &EntryPass) -> Result<u32> {
    loop {
        let raw = console.ask("Student ID (4 digits, 1000-9999): ")?;
        let checked = parse_identifier(&raw).and_then(|id| pass.check_identifier(id));
        match checked {
            Ok(id) => return Ok(id),
            Err(err) => reject(console, "identifier", &err)?,
        }
    }
}

pub(crate) fn prompt_name(console: &mut dyn Console) -> Result<String> {
    loop {
        let name = console.ask("Student Name (letters, spaces and hyphens): ")?;
        match validate_name(&name) {
            Ok(()) => return Ok(name),
            Err(err) => reject(console, "name", &err)?,
        }
    }
}

/// Ask for the score of a zero-based course index.
pub(crate) fn prompt_score(console: &mut dyn Console, course: usize) -> Result<f64> {
    loop {
        let raw = console.ask(&format!("  Course {} (0-100): ", course + 1))?;
        match parse_score(&raw) {
            Ok(score) => return Ok(score),
            Err(err) => reject(console, "score", &err)?,
        }
    }
}

/// Collect every field of the next record in `pass`.
pub(crate) fn prompt_record(console: &mut dyn Console, pass: &EntryPass) -> Result<StudentRecord> {
    console.line(&format!("\n--- Student {} ---", pass.next_slot() + 1))?;
    let id = prompt_identifier(console, pass)?;
    let name = prompt_name(console)?;

    let course_count = pass.course_count();
    console.line(&format!("Enter scores for {course_count} courses:"))?;
    let scores = (0..course_count)
        .map(|course| prompt_score(console, course))
        .collect::<Result<Vec<_>>>()?;

    Ok(StudentRecord::new(id, name, scores))
}

fn reject(console: &mut dyn Console, field: &str, err: &ValidationError) -> Result<()> {
    debug!(field, %err, "input rejected");
    console.message(MessageKind::Error, &err.to_string())
}
