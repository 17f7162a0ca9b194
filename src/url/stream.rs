//! Line-by-line parsing of URL lists.

use std::io::BufRead;

use crate::error::UrlError;
use crate::types::Url;
use crate::url::parser::Parser;

/// Iterator parsing one URL per line of a reader.
///
/// Malformed lines, including lines that are not valid UTF-8, yield
/// `Err(UrlError::MalformedInput)` and iteration goes on. A read error yields `Err(UrlError::Io)` once and ends the
/// stream. The stream is consumed as it goes and cannot be restarted.
///
/// ```
/// use urlfp::{Parser, UrlError};
///
/// let input = "example.com\nbad\nhttp://sub.example.com/path\n";
/// let hosts: Vec<String> = Parser::new()
///     .stream(input.as_bytes())
///     .map(|r| r.map(|u| u.host).unwrap_or_default())
///     .collect();
/// assert_eq!(hosts, vec!["example.com", "", "sub.example.com"]);
/// ```
#[derive(Debug)]
pub struct UrlStream<R> {
    reader: R,
    parser: Parser,
    line: Vec<u8>,
    lines_read: usize,
    done: bool,
}

impl<R: BufRead> UrlStream<R> {
    pub fn new(reader: R, parser: Parser) -> Self {
        Self {
            reader,
            parser,
            line: Vec::new(),
            lines_read: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

impl<R: BufRead> Iterator for UrlStream<R> {
    type Item = Result<Url, UrlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.lines_read += 1;
                let mut bytes = self.line.as_slice();
                if let Some(rest) = bytes.strip_suffix(b"\n") {
                    bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
                }
                match std::str::from_utf8(bytes) {
                    Ok(raw) => Some(self.parser.parse(raw)),
                    Err(err) => {
                        log::debug!("line {}: {}", self.lines_read, err);
                        let raw = String::from_utf8_lossy(bytes).into_owned();
                        Some(Err(UrlError::MalformedInput(raw)))
                    }
                }
            }
            Err(err) => {
                log::warn!("stopping after line {}: {}", self.lines_read, err);
                self.done = true;
                Some(Err(err.into()))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for UrlStream<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_one_item_per_line() {
        let input = "example.com\r\nsub.example.com/path\n10.10.10.10:454";
        let urls: Vec<_> = Parser::new().stream(input.as_bytes()).collect();

        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0].as_ref().unwrap().host, "example.com");
        assert_eq!(urls[1].as_ref().unwrap().path, "path");
        assert_eq!(urls[2].as_ref().unwrap().port, "454");
    }

    #[test]
    fn test_malformed_lines_continue() {
        let input = "bad\n\nexample.com\n";
        let mut stream = Parser::new().stream(input.as_bytes());

        assert_eq!(stream.next(), Some(Err(UrlError::MalformedInput("bad".to_string()))));
        assert_eq!(stream.next(), Some(Err(UrlError::MalformedInput(String::new()))));
        assert_eq!(stream.next().unwrap().unwrap().host, "example.com");
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.lines_read(), 3);
    }

    #[test]
    fn test_invalid_utf8_line_continues() {
        let input: &[u8] = b"example.com\n\xff\xfe.example.com\r\nsub.example.com\n";
        let mut stream = Parser::new().stream(input);

        assert_eq!(stream.next().unwrap().unwrap().host, "example.com");
        assert_eq!(
            stream.next(),
            Some(Err(UrlError::MalformedInput("\u{FFFD}\u{FFFD}.example.com".to_string())))
        );
        assert_eq!(stream.next().unwrap().unwrap().host, "sub.example.com");
        assert_eq!(stream.next(), None);
        assert_eq!(stream.lines_read(), 3);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_read_error_ends_stream() {
        let mut stream = UrlStream::new(BufReader::new(FailingReader), Parser::new());

        assert_eq!(stream.next(), Some(Err(UrlError::Io("boom".to_string()))));
        assert_eq!(stream.next(), None);
    }
}
