//! Batches lines in one fixed-size buffer and hands the whole batch to the target at once.
//!
//! The buffer is flushed *before* a line that would not fit is stored, so its length stays
//! strictly below the capacity at all times. Dropping the output flushes it: this is the only
//! place batched lines live before they become visible.

use super::Output;
use crate::Error;
use crate::level::Level;
use std::io::{self, Write};

/// Smallest capacity that can still hold a line terminator plus one byte of headroom.
pub const MIN_CAPACITY: usize = 3;

/// Appended after every stored line when it fits.
pub const LINE_END: &str = "\r\n";

/// Fixed-capacity line buffer in front of any [`io::Write`] target.
pub struct BufferedOutput<W: Write> {
    buffer: String,
    capacity: usize,
    target: W,
}

impl<W: Write> BufferedOutput<W> {
    /// # Errors
    /// [`Error::BufferCapacity`] when `capacity` is below [`MIN_CAPACITY`].
    pub fn new(target: W, capacity: usize) -> Result<Self, Error> {
        if capacity < MIN_CAPACITY {
            return Err(Error::BufferCapacity {
                capacity,
                minimum: MIN_CAPACITY,
            });
        }

        Ok(Self {
            buffer: String::with_capacity(capacity),
            capacity,
            target,
        })
    }

    /// Stores `line` followed by [`LINE_END`], flushing first if it would not fit.
    ///
    /// A line longer than the whole buffer is cut to `capacity - 1` bytes (on a character
    /// boundary) and stored without a terminator. The line is always stored, even when the
    /// automatic flush fails.
    ///
    /// # Errors
    /// Only the target's error from an automatic flush.
    pub fn append(&mut self, line: &str) -> io::Result<()> {
        let flushed = if self.buffer.len() + line.len() + 1 >= self.capacity {
            self.flush()
        } else {
            Ok(())
        };

        let room = self.capacity - self.buffer.len() - 1;
        let mut end = line.len().min(room);
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        self.buffer.push_str(&line[..end]);

        if self.buffer.len() + LINE_END.len() < self.capacity {
            self.buffer.push_str(LINE_END);
        }

        debug_assert!(self.buffer.len() < self.capacity);
        flushed
    }

    /// Writes the buffered content to the target in a single `write_all`, then empties the
    /// buffer. The buffer is emptied even if the target fails. No-op when already empty.
    ///
    /// # Errors
    /// The target's write or flush error.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let result = self
            .target
            .write_all(self.buffer.as_bytes())
            .and_then(|()| self.target.flush());
        self.buffer.clear();
        result
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// What the next flush would hand to the target.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub const fn get_ref(&self) -> &W {
        &self.target
    }

    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.target
    }
}

impl<W: Write> Drop for BufferedOutput<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<W: Write + Send> Output for BufferedOutput<W> {
    fn write(&mut self, _level: Level, line: &str) -> Result<(), Error> {
        self.append(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        BufferedOutput::<W>::flush(self)?;
        Ok(())
    }
}
