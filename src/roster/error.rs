//! Error types for the roster. Field rejections are kept apart from
//! roster-level failures because the console reacts differently: the first
//! re-prompts the same field, the second prints a message and returns to the
//! menu.

use thiserror::Error;

use super::{MAX_IDENTIFIER, MAX_NAME_LEN, MIN_IDENTIFIER};

/// Rejections raised while a single field is being entered. The display text
/// is what the console shows before prompting for the same field again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input. Please enter numbers only.")]
    NotANumber,

    #[error("ID must be 4 digits ({}-{}).", MIN_IDENTIFIER, MAX_IDENTIFIER)]
    IdentifierRange(i64),

    #[error("This ID already exists. Please enter a unique ID.")]
    DuplicateIdentifier(u32),

    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Name is too long. Maximum {} characters.", MAX_NAME_LEN - 1)]
    NameTooLong,

    #[error("Invalid name. Use letters, spaces and hyphens only, starting with a letter.")]
    NameCharset,

    #[error("Score must be between 0 and 100.")]
    ScoreRange,

    #[error("Please enter between {min} and {max}.")]
    CountRange { min: usize, max: usize },
}

/// Failures of report, sort, and search operations over the roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("No student data available.")]
    NoData,

    #[error("Student with ID {0} not found.")]
    IdNotFound(i64),

    #[error("Student '{0}' not found.")]
    NameNotFound(String),

    #[error("Course {} does not exist.", .0 + 1)]
    CourseOutOfRange(usize),

    #[error("Expected {expected} entries but received {actual}.")]
    CapacityMismatch { expected: usize, actual: usize },

    #[error("Expected {expected} courses per record but received {actual}.")]
    CourseCountMismatch { expected: usize, actual: usize },
}
