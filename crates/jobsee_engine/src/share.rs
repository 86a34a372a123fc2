use std::io::{self, Write};
use std::process::{Command, Stdio};

use jobsee_core::SharePayload;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("share cancelled")]
    Cancelled,
    #[error("sharing unavailable: {0}")]
    Unavailable(String),
}

/// Platform share action. `Ok` means the payload was handed over.
pub trait ShareSheet: Send {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Prints the payload to a writer, typically stdout.
pub struct WriterShareSheet<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterShareSheet<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_payload(&mut self, payload: &SharePayload) -> io::Result<()> {
        writeln!(self.writer, "--- Share: {} ---", payload.title)?;
        writeln!(self.writer, "{}", payload.message)?;
        writeln!(self.writer, "{}", payload.url)?;
        self.writer.flush()
    }
}

impl<W: Write + Send> ShareSheet for WriterShareSheet<W> {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        self.write_payload(payload)
            .map_err(|err| ShareError::Unavailable(err.to_string()))
    }
}

/// Pipes the message and link into an external program, e.g. `wl-copy`.
///
/// A program that cannot be started makes sharing unavailable; one that exits
/// unsuccessfully counts as cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShareSheet {
    program: String,
    args: Vec<String>,
}

impl CommandShareSheet {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a command line on whitespace. `None` when it is blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(ToOwned::to_owned);
        let program = words.next()?;
        Some(Self::new(program, words.collect()))
    }
}

impl ShareSheet for CommandShareSheet {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|err| ShareError::Unavailable(format!("{}: {}", self.program, err)))?;

        if let Some(mut stdin) = child.stdin.take() {
            let text = format!("{}\n{}\n", payload.message, payload.url);
            // A program that exits without reading is judged by its status.
            let _ = stdin.write_all(text.as_bytes());
        }

        let status = child
            .wait()
            .map_err(|err| ShareError::Unavailable(err.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ShareError::Cancelled)
        }
    }
}
