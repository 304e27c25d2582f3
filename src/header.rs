//! Parsing of the plain text codebook header.
//!
//! Every non-blank line holds one `TOKEN CODE` pair: the token is the first run of
//! non-whitespace characters, the code is the run of `0`/`1` after it. Only whitespace may
//! follow the code. Blank lines are skipped, line numbers in errors count them anyway.
//!
//! ```
//! let pairs = ruhuff::header::parse_header("the 0\nquick 10\n\nfox 11\n").unwrap();
//! assert_eq!(pairs[1], ("quick".to_string(), "10".to_string()));
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use crate::is_c_space as is_space;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("Header seems to start with a bit on line {line}")]
    StartsWithBit { line: usize },
    #[error("Missing code on header line {line}")]
    MissingCode { line: usize },
    #[error("Empty code on header line {line}")]
    EmptyCode { line: usize },
    #[error("Garbage after code on header line {line}")]
    TrailingGarbage { line: usize },
    #[error("Header is empty")]
    Empty,
    #[error("Header line {line} is not valid UTF-8")]
    NotUtf8 { line: usize },
    #[cfg(feature = "std")]
    #[error("Failed to read header")]
    Io(#[from] std::io::Error),
}

/// Parses a whole header into ordered `(token, code)` pairs, ready for [`Codebook::build`](crate::Codebook::build).
pub fn parse_header(text: &str) -> Result<Vec<(String, String)>, HeaderError> {
    let mut parser = HeaderParser::default();
    for line in text.lines() {
        parser.push_line(line)?;
    }
    parser.finish()
}

/// Reads and parses a header line by line.
///
/// Lines are split on `\n` as raw bytes, a line that is not UTF-8 is reported with its number.
#[cfg(feature = "std")]
pub fn read_header<R: std::io::BufRead>(source: R) -> Result<Vec<(String, String)>, HeaderError> {
    let mut parser = HeaderParser::default();
    for line in source.split(b'\n') {
        let line = line?;
        let line = core::str::from_utf8(&line).map_err(|_| HeaderError::NotUtf8 {
            line: parser.line + 1,
        })?;
        parser.push_line(line)?;
    }
    parser.finish()
}

#[derive(Default)]
struct HeaderParser {
    pairs: Vec<(String, String)>,
    line: usize,
    seen_content: bool,
}

impl HeaderParser {
    fn push_line(&mut self, line: &str) -> Result<(), HeaderError> {
        use HeaderError as err;

        self.line += 1;
        let line_nr = self.line;

        let rest = line.trim_start_matches(is_space);
        if rest.is_empty() {
            return Ok(());
        }

        if !self.seen_content {
            self.seen_content = true;
            if rest.starts_with(['0', '1']) {
                return Err(err::StartsWithBit { line: line_nr });
            }
        }

        let token_end = rest.find(is_space).unwrap_or(rest.len());
        let (token, rest) = rest.split_at(token_end);

        let rest = rest.trim_start_matches(is_space);
        if rest.is_empty() {
            return Err(err::MissingCode { line: line_nr });
        }

        let code_end = rest.find(|c: char| c != '0' && c != '1').unwrap_or(rest.len());
        let (code, rest) = rest.split_at(code_end);
        if code.is_empty() {
            return Err(err::EmptyCode { line: line_nr });
        }

        if !rest.chars().all(is_space) {
            return Err(err::TrailingGarbage { line: line_nr });
        }

        self.pairs.push((token.into(), code.into()));
        Ok(())
    }

    fn finish(self) -> Result<Vec<(String, String)>, HeaderError> {
        if self.pairs.is_empty() {
            return Err(HeaderError::Empty);
        }
        Ok(self.pairs)
    }
}
