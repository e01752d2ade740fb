//! Buffered output.
//!
//! The encoder never writes to its destination while walking a value. Output
//! accumulates in a [`FlushableBuffer`] and reaches the destination in a
//! single [`commit`](FlushableBuffer::commit), so a failed encode leaves the
//! destination untouched.

use crate::{Error, Result};
use std::fmt;
use std::io;

/// An in-memory text buffer in front of a byte stream.
///
/// # Examples
///
/// ```rust
/// use serde_human::FlushableBuffer;
///
/// let mut sink = FlushableBuffer::new(Vec::new());
/// sink.write("Name:");
/// sink.write(" theChild\n");
/// assert_eq!(sink.as_str(), "Name: theChild\n");
///
/// sink.commit().unwrap();
/// assert!(sink.is_empty());
/// assert_eq!(sink.get_ref(), b"Name: theChild\n");
/// ```
#[derive(Debug)]
pub struct FlushableBuffer<W> {
    buffer: String,
    stream: W,
}

impl<W: io::Write> FlushableBuffer<W> {
    pub fn new(stream: W) -> Self {
        FlushableBuffer {
            buffer: String::new(),
            stream,
        }
    }

    /// Appends text to the pending buffer.
    pub fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Pending text that has not been committed yet.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes the whole buffer to the stream and flushes it.
    ///
    /// Returns the number of bytes written. The buffer is cleared on
    /// success; on failure it is kept so the caller decides what to do.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the stream rejects the write or the flush.
    pub fn commit(&mut self) -> Result<usize> {
        self.stream
            .write_all(self.buffer.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))?;
        self.stream
            .flush()
            .map_err(|e| Error::io(&e.to_string()))?;
        let written = self.buffer.len();
        self.buffer.clear();
        Ok(written)
    }

    /// Discards pending text.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn get_ref(&self) -> &W {
        &self.stream
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.stream
    }

    /// Consumes the buffer, dropping uncommitted text.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: io::Write> fmt::Write for FlushableBuffer<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
