//! Line-oriented input in the usual judge format: one value per line.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::{ExerciseError, ExerciseResult};

pub struct LineReader<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// The next line without its terminator.
    pub fn line(&mut self, what: &'static str) -> ExerciseResult<String> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(ExerciseError::MissingInput(what));
        }
        Ok(self.buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// The next line parsed as an integer, ignoring surrounding whitespace.
    pub fn number<T>(&mut self, what: &'static str) -> ExerciseResult<T>
    where
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let line = self.line(what)?;
        let input = line.trim();
        input
            .parse()
            .map_err(|source| ExerciseError::InvalidNumber {
                what,
                input: input.to_string(),
                source,
            })
    }
}
