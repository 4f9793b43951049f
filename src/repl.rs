//! The interactive command loop.
//!
//! Input comes from a [`LineSource`]: `rustyline` when attached to a terminal, or any
//! `BufRead` for piped input and tests. One failing command never ends the session; only
//! `exit`, an interrupt, or end of input do.

use crate::commands::{self, Command, DispatchError};
use crate::render;
use crate::session::Session;
use anyhow::{Result, anyhow};
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter command: ";

/// What the user produced at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// Ctrl-D or closed input.
    Eof,
}

pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent>;
}

/// Line editor with in-session history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| anyhow!("failed to init rustyline: {e}"))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.editor.add_history_entry(line.as_str())
                {
                    debug!("failed to record history: {e}");
                }
                Ok(ReadEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(anyhow!("readline error: {e}")),
        }
    }
}

/// Non-interactive input: one command per line, no prompt echo.
///
/// Bytes that are not valid UTF-8 are replaced, so one garbled line is dispatched (and
/// rejected) like any other instead of ending the session.
pub struct BufReadSource<R> {
    reader: R,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadEvent> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadEvent::Eof);
        }
        Ok(ReadEvent::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Whether the loop should keep prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Lowercase the whole line and split it at the first whitespace run: `(token, argument)`.
pub fn split_command_line(line: &str) -> (String, String) {
    let normalized = line.trim().to_lowercase();
    match normalized.split_once(char::is_whitespace) {
        Some((token, rest)) => (token.to_string(), rest.trim_start().to_string()),
        None => (normalized, String::new()),
    }
}

/// Handle one input line, writing all user-facing text to `out`.
///
/// Only a failing write to `out` is returned as an error.
pub fn handle_line<W: Write>(session: &Session, line: &str, out: &mut W) -> io::Result<Control> {
    let (token, argument) = split_command_line(line);
    match token.as_str() {
        "" => return Ok(Control::Continue),
        "help" => render::write_help(out)?,
        "exit" => {
            writeln!(out, "Exiting the program.")?;
            return Ok(Control::Exit);
        }
        _ => match Command::parse(&token, &argument) {
            Ok(cmd) => {
                debug!("dispatching {:?}", cmd);
                match commands::execute(session, &cmd) {
                    Ok(outcome) => render::write_outcome(out, &outcome)?,
                    Err(e) => writeln!(out, "An error occurred: {e:#}")?,
                }
            }
            Err(e @ DispatchError::UnknownCommand(_)) => writeln!(out, "{e}")?,
            Err(e) => writeln!(out, "Error executing command: {e}")?,
        },
    }
    Ok(Control::Continue)
}

/// Print the help text, then prompt and dispatch until exit, interrupt or end of input.
pub fn run<S: LineSource, W: Write>(session: &Session, source: &mut S, out: &mut W) -> Result<()> {
    render::write_help(out)?;
    loop {
        writeln!(out)?;
        out.flush()?;
        match source.read_line(PROMPT)? {
            ReadEvent::Line(line) => {
                if handle_line(session, &line, out)? == Control::Exit {
                    break;
                }
            }
            ReadEvent::Interrupted => {
                writeln!(out, "\nProgram interrupted. Exiting...")?;
                break;
            }
            ReadEvent::Eof => {
                writeln!(out, "Exiting the program.")?;
                break;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_whitespace_run_only() {
        assert_eq!(
            split_command_line("  6   Queen  MARY \n"),
            ("6".to_string(), "queen  mary".to_string())
        );
        assert_eq!(split_command_line("HELP"), ("help".to_string(), String::new()));
        assert_eq!(split_command_line("   "), (String::new(), String::new()));
    }
}
