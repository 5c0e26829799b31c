use std::io::{BufRead, Read};

use crate::error::BencodeError;

/// Buffered, peekable view over a sequential byte stream.
///
/// The decoder only ever peeks the next byte, reads an exact number of
/// bytes, or reads up to a delimiter. Anything implementing [`BufRead`]
/// qualifies; there is no seeking or rewinding.
pub struct ByteSource<R> {
    inner: R,
}

impl<R: BufRead> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        ByteSource { inner }
    }

    /// Returns the next byte without advancing the stream.
    pub fn peek_one(&mut self) -> Result<u8, BencodeError> {
        let buf = self.inner.fill_buf()?;
        buf.first().copied().ok_or(BencodeError::UnexpectedEnd)
    }

    /// Consumes and returns the next byte.
    pub fn read_byte(&mut self) -> Result<u8, BencodeError> {
        let b = self.peek_one()?;
        self.inner.consume(1);
        Ok(b)
    }

    /// Consumes exactly `n` bytes.
    ///
    /// Reads incrementally, so an adversarial length never triggers an
    /// up-front `n`-sized allocation.
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>, BencodeError> {
        let mut buf = Vec::new();
        let got = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        if got < n {
            return Err(BencodeError::UnexpectedEnd);
        }
        Ok(buf)
    }

    /// Consumes up to and including the first `delim`, returning the bytes
    /// before it. The delimiter itself is not part of the result.
    pub fn read_until(&mut self, delim: u8) -> Result<Vec<u8>, BencodeError> {
        let mut buf = Vec::new();
        self.inner.read_until(delim, &mut buf)?;
        if buf.last() != Some(&delim) {
            return Err(BencodeError::UnexpectedEnd);
        }
        buf.pop();
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut src = ByteSource::new(&b"ab"[..]);
        assert_eq!(src.peek_one().unwrap(), b'a');
        assert_eq!(src.peek_one().unwrap(), b'a');
        assert_eq!(src.read_byte().unwrap(), b'a');
        assert_eq!(src.read_byte().unwrap(), b'b');
        assert!(matches!(src.peek_one(), Err(BencodeError::UnexpectedEnd)));
    }

    #[test]
    fn test_read_exact() {
        let mut src = ByteSource::new(&b"hello"[..]);
        assert_eq!(src.read_exact(4).unwrap(), b"hell");
        assert_eq!(src.read_exact(0).unwrap(), b"");
        assert!(matches!(
            src.read_exact(2),
            Err(BencodeError::UnexpectedEnd)
        ));
    }

    #[test]
    fn test_read_until_excludes_delimiter() {
        let mut src = ByteSource::new(&b"12:ab"[..]);
        assert_eq!(src.read_until(b':').unwrap(), b"12");
        assert_eq!(src.read_byte().unwrap(), b'a');
    }

    #[test]
    fn test_read_until_delimiter_first() {
        let mut src = ByteSource::new(&b":rest"[..]);
        assert_eq!(src.read_until(b':').unwrap(), b"");
    }

    #[test]
    fn test_read_until_missing_delimiter() {
        let mut src = ByteSource::new(&b"1234"[..]);
        assert!(matches!(
            src.read_until(b':'),
            Err(BencodeError::UnexpectedEnd)
        ));
    }
}
