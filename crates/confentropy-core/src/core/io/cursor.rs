use super::fields::LogError;
use std::io::{BufRead, Lines};

/// A forward-only cursor over the lines of a log, tracking one-based line numbers.
pub struct LineCursor<R> {
    lines: Lines<R>,
    line_num: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Number of the most recently returned line, or 0 before the first read.
    pub fn line_number(&self) -> usize {
        self.line_num
    }

    /// Advances by one line. Returns `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>, LogError> {
        match self.lines.next() {
            Some(line) => {
                self.line_num += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    /// Advances by exactly `n` lines, returning them with their line numbers.
    ///
    /// Running out of input before `n` lines were read is an error. `n` comes from the log
    /// itself, so storage grows with the lines actually read.
    pub fn take_lines(&mut self, n: usize) -> Result<Vec<(usize, String)>, LogError> {
        let mut taken = Vec::new();
        while taken.len() < n {
            match self.next_line()? {
                Some(line) => taken.push((self.line_num, line)),
                None => {
                    return Err(LogError::UnexpectedEof {
                        expected: n,
                        consumed: taken.len(),
                        line: self.line_num,
                    });
                }
            }
        }
        Ok(taken)
    }
}
