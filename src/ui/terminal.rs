use std::collections::VecDeque;
use std::io::{self, BufRead, Stdin, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;
use thiserror::Error;

/// Raised when the input stream reaches end-of-file or can no longer be read.
/// The session treats it as a request to exit.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "",
            MessageKind::Success => "SUCCESS: ",
            MessageKind::Error => "ERROR: ",
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            MessageKind::Info => None,
            MessageKind::Success => Some(Color::Green),
            MessageKind::Error => Some(Color::Red),
        }
    }
}

/// Line-oriented text boundary between the session and the user.
pub trait Console {
    /// Read one line without its terminator. Fails with [`InputClosed`] at
    /// end of input.
    fn read_line(&mut self) -> Result<String>;

    /// Write text as-is, without a trailing newline.
    fn write(&mut self, text: &str) -> Result<()>;

    fn line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn message(&mut self, kind: MessageKind, text: &str) -> Result<()> {
        self.line(&format!("{}{}", kind.prefix(), text))
    }

    /// Print `prompt` and read the answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;
        self.read_line()
    }
}

/// Console over the process stdin/stdout. Status messages are colored with
/// crossterm when stdout is a terminal and color was not disabled.
pub struct TerminalConsole {
    stdin: Stdin,
    stdout: Stdout,
    color: bool,
}

impl TerminalConsole {
    pub fn new(color: bool) -> Self {
        let stdout = io::stdout();
        let color = color && stdout.is_tty();
        Self {
            stdin: io::stdin(),
            stdout,
            color,
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> Result<String> {
        self.stdout.flush().context("failed to flush stdout")?;
        read_text_line(&mut self.stdin.lock())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.stdout
            .write_all(text.as_bytes())
            .context("failed to write to stdout")
    }

    fn message(&mut self, kind: MessageKind, text: &str) -> Result<()> {
        let line = format!("{}{}", kind.prefix(), text);
        match kind.color() {
            Some(color) if self.color => {
                execute!(
                    self.stdout,
                    SetForegroundColor(color),
                    Print(line),
                    ResetColor,
                    Print("\n")
                )
                .context("failed to write status message")
            }
            _ => self.line(&line),
        }
    }
}

/// In-memory console fed from a fixed script of input lines. Everything
/// written is captured so a whole session transcript can be inspected.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Input lines that were never consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String> {
        let line = self.input.pop_front().ok_or(InputClosed)?;
        Ok(strip_line_ending(&line).to_string())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }
}

/// Read one line of raw bytes. Bytes that are not valid UTF-8 are replaced
/// rather than treated as a read failure, so a stray byte is just a line the
/// validators reject.
fn read_text_line(reader: &mut impl BufRead) -> Result<String> {
    let mut bytes = Vec::new();
    match reader.read_until(b'\n', &mut bytes) {
        Ok(0) | Err(_) => Err(InputClosed.into()),
        Ok(_) => Ok(strip_line_ending(&String::from_utf8_lossy(&bytes)).to_string()),
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(|ch: char| ch == '\n' || ch == '\r')
}
