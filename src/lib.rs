//! Core library surface for the Student Manager console application.
//!
//! The roster engines are kept apart from the console front-end so the binary
//! and the tests drive the same pieces.
pub mod config;
pub mod models;
pub mod roster;
pub mod ui;

pub use config::{Cli, SessionConfig};

/// Domain types passed between the roster and the screens.
pub use models::{CourseStats, GradeBand, GradeDistribution, StudentRecord, StudentSummary};

pub use roster::{EntryPass, Roster, RosterError, SortKey, ValidationError};

/// The interactive session entry points and the console boundary.
pub use ui::{run_app, run_session, App, Console, MenuChoice, ScriptedConsole, TerminalConsole};
