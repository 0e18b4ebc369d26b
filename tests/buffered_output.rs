//! Tests for the fixed-capacity line buffer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use taglog::Error;
use taglog::output::{BufferedOutput, LINE_END, MIN_CAPACITY};

/// Cloneable writer so tests can inspect what reached the target after the buffer is gone.
#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl SharedWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts write_all calls by recording every chunk separately.
#[derive(Default)]
struct ChunkWriter {
    chunks: Vec<Vec<u8>>,
}

impl Write for ChunkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.chunks.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn append_flushes_before_overflow() {
    let mut out = BufferedOutput::new(Vec::new(), 16).unwrap();

    out.append("ab").unwrap();
    assert_eq!(out.contents(), "ab\r\n");
    assert!(out.get_ref().is_empty());

    out.append("cdefghijklmno").unwrap();
    assert_eq!(out.get_ref().as_slice(), b"ab\r\n");
    assert_eq!(out.contents(), "cdefghijklmno\r\n");
    assert!(out.len() < out.capacity());
}

#[test]
fn flush_on_empty_buffer_is_noop() {
    let mut out = BufferedOutput::new(ChunkWriter::default(), 16).unwrap();

    out.flush().unwrap();

    assert!(out.is_empty());
    assert_eq!(out.len(), 0);
    assert!(out.get_ref().chunks.is_empty());
}

#[test]
fn flush_writes_batch_once_and_empties_buffer() {
    let mut out = BufferedOutput::new(ChunkWriter::default(), 64).unwrap();
    out.append("one").unwrap();
    out.append("two").unwrap();

    out.flush().unwrap();

    assert!(out.is_empty());
    assert_eq!(out.get_ref().chunks, vec![b"one\r\ntwo\r\n".to_vec()]);
}

#[test]
fn capacity_below_minimum_is_rejected() {
    for capacity in 0..MIN_CAPACITY {
        let err = BufferedOutput::new(Vec::new(), capacity).err().unwrap();
        assert!(matches!(
            err,
            Error::BufferCapacity { capacity: c, minimum: MIN_CAPACITY } if c == capacity
        ));
    }
    assert!(BufferedOutput::new(Vec::new(), MIN_CAPACITY).is_ok());
}

#[test]
fn oversized_line_is_cut_without_terminator() {
    let mut out = BufferedOutput::new(Vec::new(), 8).unwrap();

    out.append("abcdefghijkl").unwrap();

    assert_eq!(out.contents(), "abcdefg");
    assert!(!out.contents().ends_with(LINE_END));
    assert_eq!(out.len(), 7);
}

#[test]
fn oversized_line_is_cut_on_char_boundary() {
    let mut out = BufferedOutput::new(Vec::new(), 5).unwrap();

    // 4 bytes of room end in the middle of the second 'é'
    out.append("aééé").unwrap();

    assert_eq!(out.contents(), "aé");
}

#[test]
fn length_stays_below_capacity() {
    let mut out = BufferedOutput::new(Vec::new(), 10).unwrap();
    for line in ["a", "bbbb", "cccccccccccccc", "", "dd", "eeeeeeeee"] {
        out.append(line).unwrap();
        assert!(out.len() < out.capacity(), "after {line:?}");
    }
}

#[test]
fn drop_flushes_remaining_lines() {
    let writer = SharedWriter::default();
    {
        let mut out = BufferedOutput::new(writer.clone(), 64).unwrap();
        out.append("pending").unwrap();
        assert_eq!(writer.contents(), "");
    }
    assert_eq!(writer.contents(), "pending\r\n");
}

#[test]
fn failed_flush_still_empties_buffer() {
    let mut out = BufferedOutput::new(FailingWriter, 16).unwrap();
    out.append("lost").unwrap();

    assert!(out.flush().is_err());
    assert!(out.is_empty());
}

#[test]
fn append_stores_line_even_when_auto_flush_fails() {
    let mut out = BufferedOutput::new(FailingWriter, 8).unwrap();
    out.append("abc").unwrap();

    assert!(out.append("defg").is_err());
    assert_eq!(out.contents(), "defg\r\n");
}
