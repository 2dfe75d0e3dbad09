use std::io::BufRead;

use crate::error::{Error, ErrorKind, Result};

/// Splits a buffered source into raw lines. The delimiter is not part of
/// the yielded line.
pub struct LineReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> std::iter::Iterator for LineReader<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(self.delim, &mut buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                if buf.last() == Some(&self.delim) {
                    buf.pop();
                }
                Some(Ok(buf))
            }
            Err(e) => Some(Err(
                Error::from(("input reader failed", e)).kind_of(ErrorKind::Io)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;

    #[test]
    fn test_line_reader() -> std::result::Result<(), String> {
        let reader = LineReader::new(io::Cursor::new(b"foo\nbar\n\nbaz".to_vec()));
        let lines = reader.collect::<Result<Vec<_>>>()?;
        assert_eq!(
            lines,
            vec![
                b"foo".to_vec(),
                b"bar".to_vec(),
                b"".to_vec(),
                b"baz".to_vec()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_line_reader_custom_delimiter() -> std::result::Result<(), String> {
        let reader = LineReader::with_delimiter(io::Cursor::new(b"a\nb\0c\0".to_vec()), b'\0');
        let lines = reader.collect::<Result<Vec<_>>>()?;
        assert_eq!(lines, vec![b"a\nb".to_vec(), b"c".to_vec()]);
        Ok(())
    }

    #[test]
    fn test_line_reader_error() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "broken pipe"))
            }
        }

        let mut reader = LineReader::new(BufReader::new(Broken));
        match reader.next() {
            Some(Err(e)) => {
                assert_eq!(e.kind(), ErrorKind::Io);
                assert_eq!(e.message(), "input reader failed");
            }
            Some(Ok(line)) => panic!("expected read error, got {:?}", line),
            None => panic!("expected read error, got EOF"),
        }
    }
}
