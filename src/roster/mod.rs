//! In-memory roster split across logical submodules: the fixed-capacity
//! store, field validators, and the derived views computed over it.

mod error;
mod lookup;
mod ordering;
mod stats;
mod store;
mod validation;

pub use error::{RosterError, ValidationError};
pub use ordering::SortKey;
pub use store::{EntryPass, Roster};
pub use validation::{
    parse_count, parse_identifier, parse_score, validate_count, validate_identifier,
    validate_name, validate_score,
};

/// Largest roster a session can be configured with.
pub const MAX_STUDENTS: usize = 30;
/// Largest number of courses a session can be configured with.
pub const MAX_COURSES: usize = 6;
/// Names must be strictly shorter than this many characters.
pub const MAX_NAME_LEN: usize = 20;
pub const MIN_IDENTIFIER: u32 = 1000;
pub const MAX_IDENTIFIER: u32 = 9999;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;
