//! Reader for unformatted uppercase English text.

use std::io::BufRead;

use super::{read_line, MessageReader};
use crate::translate::types::error::{Result, TranslateError};
use crate::translate::types::models::Token;

/// Reads an English message one character at a time.
///
/// Each text line is a sentence: consuming past its last character yields
/// `EndOfLine` and moves the cursor to the next line. A blank character is a
/// word boundary; anything outside A-Z and blank is rejected.
pub struct EnglishReader<R> {
    source: R,
    line: Option<String>,
    pos: usize,
    started: bool,
    done: bool,
}

impl<R: BufRead> EnglishReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            line: None,
            pos: 0,
            started: false,
            done: false,
        }
    }

    fn advance(&mut self) -> Result<()> {
        self.line = read_line(&mut self.source)?;
        self.pos = 0;
        Ok(())
    }
}

impl<R: BufRead> MessageReader for EnglishReader<R> {
    fn next_token(&mut self) -> Result<Token> {
        if self.done {
            return Ok(Token::EndOfMessage);
        }
        if !self.started {
            self.advance()?;
            self.started = true;
        }

        let line = match &self.line {
            Some(line) => line,
            None => {
                self.done = true;
                return Ok(Token::EndOfMessage);
            }
        };

        let ch = match line[self.pos..].chars().next() {
            Some(ch) => ch,
            None => {
                // Line buffer exhausted: emit the line boundary and move on.
                // An empty line lands here immediately.
                self.advance()?;
                return Ok(Token::EndOfLine);
            }
        };
        self.pos += ch.len_utf8();

        match ch {
            ' ' => Ok(Token::EndOfWord),
            'A'..='Z' => Ok(Token::Letter((ch as u8 - b'A') as usize)),
            other => Err(TranslateError::InvalidSymbol(other.to_string())),
        }
    }
}
