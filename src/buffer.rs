//! Growable byte buffer used throughout the parser and renderers.
//!
//! This mirrors the collaborator contract the original `hoedown_buffer`
//! C type provided (`ext/buffer.c` in the hoedown/redcarpet lineage):
//! append bytes, append formatted text, drop bytes from the head,
//! compare case-insensitively, test a literal prefix, and expose
//! itself as a plain byte slice. There is no FFI boundary left in this
//! port, so it is just a thin, safe wrapper around `Vec<u8>`.

use std::io::{self, Read, Write};
use std::ops::{Deref, DerefMut};
use std::str;

/// Buffer for holding markdown contents, and every intermediate
/// span/block accumulated while rendering.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Create a buffer with the specified unit allocation size.
    ///
    /// Mirrors the C API's growth-chunk size; here it is only used as
    /// an initial capacity hint.
    pub fn new(size: usize) -> Buffer {
        Buffer { data: Vec::with_capacity(size) }
    }

    /// Construct a markdown document from a given Reader.
    ///
    /// Note that `Buffer` also implements `Read`, so it can be used
    /// with this method.
    pub fn read_from<R>(mut reader: R) -> io::Result<Buffer>
        where R: Read
    {
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        Ok(Buffer::from(contents))
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The length of the contents inside the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Shortens the buffer, dropping any bytes past `len`.
    ///
    /// Used by the autolink rewind protocol (`autolink.rs`) to retract
    /// a prefix of already-emitted output and re-emit it as part of a
    /// recognized link.
    pub fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Pipe another buffer's contents into this one
    pub fn pipe(&mut self, input: &Buffer) {
        self.data.extend_from_slice(&input.data);
    }

    /// Attempt to get a string from the buffer's contents
    pub fn to_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(&self.data)
    }

    /// Removes the first `n` bytes, shifting the remainder down.
    ///
    /// Grounded on `bufslurp` in `ext/buffer.c`, which uses `memmove`
    /// to discard a processed prefix without reallocating the tail.
    pub fn slurp(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data.drain(0..n);
    }

    /// Case-insensitive byte comparison against another buffer.
    ///
    /// Grounded on `bufcasecmp` in `ext/buffer.c`.
    pub fn case_eq(&self, other: &Buffer) -> bool {
        self.case_eq_bytes(&other.data)
    }

    /// Case-insensitive comparison against a literal string, used by
    /// the reference table lookup and the known-tag matchers.
    pub fn case_eq_str(&self, other: &str) -> bool {
        self.case_eq_bytes(other.as_bytes())
    }

    fn case_eq_bytes(&self, other: &[u8]) -> bool {
        self.data.len() == other.len()
            && self.data.iter().zip(other.iter())
                .all(|(a, b)| a.to_ascii_lowercase() == b.to_ascii_lowercase())
    }

    /// True if this buffer starts with the given literal prefix.
    ///
    /// Grounded on `bufprefix` in `ext/buffer.c`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.data.starts_with(prefix)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Read for Buffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut slice: &[u8] = &self.data;
        let n = Read::read(&mut slice, buf)?;
        self.data.drain(0..n);
        Ok(n)
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<&[u8]> for Buffer {
    fn from(s: &[u8]) -> Buffer {
        Buffer { data: s.to_vec() }
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Buffer {
        Buffer { data: s.as_bytes().to_vec() }
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Buffer {
        Buffer { data }
    }
}

/// Dereference to the underlying bytes.
///
/// This is to hook into the automatic dereference coercions system.
impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for Buffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_appends() {
        let mut a = Buffer::from("foo");
        let b = Buffer::from("bar");
        a.pipe(&b);
        assert_eq!(a.to_str().unwrap(), "foobar");
    }

    #[test]
    fn slurp_drops_prefix() {
        let mut a = Buffer::from("hello world");
        a.slurp(6);
        assert_eq!(a.to_str().unwrap(), "world");
    }

    #[test]
    fn case_insensitive_compare() {
        let a = Buffer::from("Foo-Bar");
        assert!(a.case_eq_str("foo-bar"));
        assert!(!a.case_eq_str("foo-baz"));
    }
}
