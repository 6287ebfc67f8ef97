//! Line-oriented prompt that re-asks until the validator accepts.

use std::io::{BufRead, Write};

use crate::error::TidyError;

use super::answer::ValidationError;

/// Input surface used by the review loop.
///
/// Implementations own the re-prompt loop: they keep asking until
/// `validate` accepts the answer, and fail only when input cannot continue.
pub trait Prompt {
    /// Asks `label` and returns the first answer `validate` accepts.
    ///
    /// # Errors
    ///
    /// Returns [`TidyError::Prompt`] when the input stream ends and
    /// [`TidyError::Io`] when reading or writing fails.
    fn ask(
        &mut self,
        label: &str,
        validate: &dyn Fn(&str) -> Result<(), ValidationError>,
    ) -> Result<String, TidyError>;
}

/// [`Prompt`] over any buffered reader and writer, normally stdin/stdout.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a prompt reading answers from `reader` and writing the label
    /// and validation messages to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_answer(&mut self, label: &str) -> Result<String, TidyError> {
        write!(self.writer, "{label}: ").map_err(|error| TidyError::io(&error))?;
        self.writer.flush().map_err(|error| TidyError::io(&error))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|error| TidyError::io(&error))?;
        if read == 0 {
            return Err(TidyError::Prompt {
                message: "input closed before an answer was given".to_owned(),
            });
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

impl<R, W> Prompt for LinePrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(
        &mut self,
        label: &str,
        validate: &dyn Fn(&str) -> Result<(), ValidationError>,
    ) -> Result<String, TidyError> {
        loop {
            let answer = self.read_answer(label)?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(error) => {
                    writeln!(self.writer, "  {error}").map_err(|io| TidyError::io(&io))?;
                }
            }
        }
    }
}
