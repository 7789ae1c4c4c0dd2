//! Reader for Morse-encoded messages.

use std::io::BufRead;

use super::{read_line, MessageReader};
use crate::translate::table::CodeTable;
use crate::translate::types::error::{Result, TranslateError};
use crate::translate::types::models::Token;

/// Reads a Morse message one raw line at a time.
///
/// The persisted Morse form carries one code group per line. Boundaries are
/// distinguished only by counting consecutive blank lines: one blank line is
/// a word break, a second blank line in a row is a sentence break. The reader
/// therefore has to remember whether the previous line was blank.
pub struct MorseReader<R> {
    source: R,
    table: CodeTable,
    prev_blank: bool,
    done: bool,
}

impl<R: BufRead> MorseReader<R> {
    /// Creates a reader backed by the built-in Morse table.
    pub fn new(source: R) -> Result<Self> {
        Ok(Self::with_table(source, CodeTable::morse()?))
    }

    /// Creates a reader with a caller-supplied code table.
    pub fn with_table(source: R, table: CodeTable) -> Self {
        Self {
            source,
            table,
            prev_blank: false,
            done: false,
        }
    }
}

impl<R: BufRead> MessageReader for MorseReader<R> {
    fn next_token(&mut self) -> Result<Token> {
        if self.done {
            return Ok(Token::EndOfMessage);
        }
        match read_line(&mut self.source)? {
            None => {
                self.done = true;
                Ok(Token::EndOfMessage)
            }
            Some(line) if line.is_empty() => {
                let token = if self.prev_blank {
                    Token::EndOfLine
                } else {
                    Token::EndOfWord
                };
                self.prev_blank = true;
                Ok(token)
            }
            Some(line) => {
                self.prev_blank = false;
                // Validate against the table before the ordinal lookup so an
                // unrecognized group surfaces as an input error.
                if !self.table.contains_code(&line) {
                    return Err(TranslateError::InvalidSymbol(line));
                }
                Ok(Token::Letter(self.table.ordinal_of(&line)?))
            }
        }
    }
}
