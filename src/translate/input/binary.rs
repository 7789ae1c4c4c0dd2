//! Reader for 8-bit binary-encoded messages.

use std::io::BufRead;

use super::{read_line, MessageReader};
use crate::translate::table::CodeTable;
use crate::translate::types::error::{Result, TranslateError};
use crate::translate::types::models::{Token, BLANK_GROUP};

/// Reads a binary message in fixed 8-bit groups.
///
/// Line breaks in the persisted form are not significant except for empty
/// lines, which mark a sentence boundary; a 16-character line holds two
/// letters. The reserved blank group (ASCII space, `00100000`) marks a word
/// boundary. Every line's length must be a multiple of 8.
pub struct BinaryReader<R> {
    source: R,
    table: CodeTable,
    line: Option<String>,
    pos: usize,
    started: bool,
    done: bool,
}

impl<R: BufRead> BinaryReader<R> {
    /// Creates a reader backed by the built-in binary table.
    pub fn new(source: R) -> Result<Self> {
        Ok(Self::with_table(source, CodeTable::binary()?))
    }

    /// Creates a reader with a caller-supplied code table.
    pub fn with_table(source: R, table: CodeTable) -> Self {
        Self {
            source,
            table,
            line: None,
            pos: 0,
            started: false,
            done: false,
        }
    }

    /// Reads the next line and checks the 8-bit grouping invariant.
    fn advance(&mut self) -> Result<()> {
        let line = read_line(&mut self.source)?;
        if let Some(line) = &line {
            if line.len() % 8 != 0 {
                return Err(TranslateError::InvalidCodeLength {
                    line: line.clone(),
                    len: line.len(),
                });
            }
        }
        self.line = line;
        self.pos = 0;
        Ok(())
    }
}

impl<R: BufRead> MessageReader for BinaryReader<R> {
    fn next_token(&mut self) -> Result<Token> {
        if self.done {
            return Ok(Token::EndOfMessage);
        }
        if !self.started {
            self.advance()?;
            self.started = true;
        }

        loop {
            let line = match &self.line {
                Some(line) => line,
                None => {
                    self.done = true;
                    return Ok(Token::EndOfMessage);
                }
            };

            if line.is_empty() {
                self.advance()?;
                return Ok(Token::EndOfLine);
            }
            if self.pos >= line.len() {
                // Non-empty line exhausted: no boundary, just keep reading.
                self.advance()?;
                continue;
            }

            let bytes = &line.as_bytes()[self.pos..self.pos + 8];
            let group = String::from_utf8_lossy(bytes).into_owned();
            self.pos += 8;

            if let Some(bit) = group.chars().find(|c| *c != '0' && *c != '1') {
                return Err(TranslateError::InvalidBit { group, bit });
            }
            if group == BLANK_GROUP {
                return Ok(Token::EndOfWord);
            }
            if !self.table.contains_code(&group) {
                return Err(TranslateError::InvalidSymbol(group));
            }
            return Ok(Token::Letter(self.table.ordinal_of(&group)?));
        }
    }
}
