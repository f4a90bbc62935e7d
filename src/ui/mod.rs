//! Console front-end: the session state machine, its prompt loops, and the
//! text screens it prints through the [`Console`] boundary.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::{run_app, run_session, App, MenuChoice};
pub use terminal::{Console, InputClosed, MessageKind, ScriptedConsole, TerminalConsole};
