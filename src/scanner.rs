use std::io::{self, BufRead, StdinLock};
use std::str::FromStr;

use crate::error::ScanError;

/// Whitespace-delimited token reader over buffered input.
///
/// Tokens are pulled line by line from the underlying reader, so a single
/// call sequence can mix token reads and whole-line reads the way contest
/// inputs usually require.
pub struct Scanner<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl Scanner<StdinLock<'static>> {
    pub fn from_stdin() -> Self {
        Scanner::new(io::stdin().lock())
    }
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Reads the next whitespace-delimited token and parses it as `T`.
    ///
    /// Returns [`ScanError::Malformed`] with the offending token when the
    /// parse fails, and [`ScanError::Exhausted`] when the input ends before
    /// a token is found.
    pub fn token<T: FromStr>(&mut self) -> Result<T, ScanError> {
        loop {
            let rest = &self.line[self.pos..];
            match rest.find(|c: char| !c.is_whitespace()) {
                Some(start) => {
                    let rest = &rest[start..];
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let token = &rest[..end];
                    self.pos += start + end;
                    return token.parse().map_err(|_| ScanError::Malformed {
                        token: token.to_string(),
                    });
                }
                None => self.refill()?,
            }
        }
    }

    pub fn integer(&mut self) -> Result<i64, ScanError> {
        self.token()
    }

    /// Reads exactly `count` integers, which may span multiple input lines.
    pub fn integers(&mut self, count: usize) -> Result<Vec<i64>, ScanError> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.integer()?);
        }
        Ok(values)
    }

    /// Returns the unread remainder of the current line, or the next line
    /// when the current one is spent. A trailing newline is stripped.
    ///
    /// Note that a token read leaves the rest of its line unread, so a
    /// `line()` call right after one returns that remainder, which may be
    /// empty.
    pub fn line(&mut self) -> Result<String, ScanError> {
        if self.pos >= self.line.len() {
            self.refill()?;
        }
        let rest = strip_newline(&self.line[self.pos..]);
        self.pos = self.line.len();
        Ok(rest.to_string())
    }

    /// Reads one line and parses every whitespace-separated token on it.
    pub fn line_of_integers(&mut self) -> Result<Vec<i64>, ScanError> {
        let line = self.line()?;
        line.split_whitespace()
            .map(|token| {
                token.parse().map_err(|_| ScanError::Malformed {
                    token: token.to_string(),
                })
            })
            .collect()
    }

    fn refill(&mut self) -> Result<(), ScanError> {
        self.line.clear();
        self.pos = 0;
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(ScanError::Exhausted);
        }
        Ok(())
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
