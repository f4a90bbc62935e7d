//! Command-line configuration. Flags can pre-answer the start-up prompts; the
//! session asks interactively for anything left unset.

use clap::Parser;

use crate::roster::{MAX_COURSES, MAX_STUDENTS};

/// Interactive student roster: enter scores, then report, sort and search.
#[derive(Parser, Debug)]
#[command(name = "student-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of students in the roster (skips the start-up prompt)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_STUDENTS as i64))]
    pub students: Option<u8>,

    /// Number of courses per student (skips the start-up prompt)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_COURSES as i64))]
    pub courses: Option<u8>,

    /// Print status messages without color
    #[arg(long)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            students: self.students.map(usize::from),
            courses: self.courses.map(usize::from),
            color: !self.no_color,
        }
    }
}

/// Settings the session starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub students: Option<usize>,
    pub courses: Option<usize>,
    pub color: bool,
}
