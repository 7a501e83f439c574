//! Transcript emission.
//!
//! The engine narrates every notable event as one human-readable line.
//! It writes through a [`TranscriptSink`] it is handed at construction
//! and never reads the transcript back; the sink is the external
//! interface golden-output comparisons run against.

use std::fmt;
use std::io::{self, Write};

use im::Vector;
use serde::{Deserialize, Serialize};

/// A line sink the engine narrates into.
///
/// Sink failures propagate to the engine's caller; nothing is
/// swallowed or retried.
pub trait TranscriptSink {
    /// Append one line to the transcript.
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// In-memory transcript: an append-only, ordered sequence of lines.
///
/// The default sink. Infallible, cheap to clone, and comparable
/// against golden output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vector<String>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over lines in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines emitted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl TranscriptSink for Transcript {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.lines.push_back(text.to_string());
        Ok(())
    }
}

/// Sink that writes each line to an `io::Write`, surfacing failures.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TranscriptSink for WriterSink<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", text)
    }
}
