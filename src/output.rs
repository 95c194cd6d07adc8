//! Output sinks and input sources
//!
//! Components never touch the process streams directly. They emit `Event`s
//! into an `Output` and read answers from an `Input`, so the binary can wire
//! up the console while tests record everything in memory.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::warn;

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::event::Event;

/// Destination for observable events
pub trait Output {
    /// Record or display one event. Never fails from the caller's view.
    fn emit(&mut self, event: Event);
}

/// Source of line-based answers
pub trait Input {
    /// Read one line. `None` means end of input or a read failure.
    fn read_line(&mut self) -> Option<String>;
}

/// Line-oriented event sink
///
/// Writes one line per event, as plain text or JSON depending on the format.
/// The binary writes to stdout; any `Write` works.
#[derive(Debug)]
pub struct Console<W = io::Stdout> {
    writer: W,
    format: OutputFormat,
}

impl Console {
    /// Create a sink writing to stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::with_writer(io::stdout(), format)
    }
}

impl<W: Write> Console<W> {
    /// Create a sink writing to the given writer
    pub fn with_writer(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Consume the sink, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &Event) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string(event)?;
                writeln!(self.writer, "{}", json)?;
            }
            // Prompts stay on the same line as the answer
            OutputFormat::Text if matches!(event, Event::CondimentPrompt) => {
                write!(self.writer, "{}", event)?;
                self.writer.flush()?;
            }
            OutputFormat::Text => {
                writeln!(self.writer, "{}", event)?;
            }
        }

        Ok(())
    }
}

impl<W: Write> Output for Console<W> {
    fn emit(&mut self, event: Event) {
        if let Err(e) = self.write_event(&event) {
            warn!("Failed to write event: {}", e);
        }
    }
}

/// Standard input source
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdin;

impl Input for Stdin {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn!("Failed to read from stdin: {}", e);
                None
            }
        }
    }
}

/// In-memory event recorder
///
/// Clones share the same buffer: hand one clone to a component and keep
/// another to inspect what it emitted.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Recorded events rendered as console text
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drain recorded events, leaving the transcript empty
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Output for Transcript {
    fn emit(&mut self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

/// Pre-recorded answers, returned in order
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Create an input that yields the given lines, then `None`
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}
