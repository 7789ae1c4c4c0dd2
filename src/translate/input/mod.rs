//! Message readers: one per encoding.
//!
//! A reader consumes raw lines from its source and normalizes them into
//! [`Token`]s. The three encodings persist boundaries differently (a blank
//! character, a blank line, a reserved bit group), which is why each reader
//! carries its own small cursor state machine. All readers share two rules:
//! the first `next_token` call performs the first line read (no separate
//! open step), and `EndOfMessage` is sticky once the source is exhausted.

mod binary;
mod english;
mod morse;

use std::io::BufRead;

use super::types::error::Result;
use super::types::models::Token;

pub use binary::BinaryReader;
pub use english::EnglishReader;
pub use morse::MorseReader;

/// Uniform token-producing interface over the three input encodings.
pub trait MessageReader {
    /// Reads the next token of the message.
    ///
    /// Performs at most the line reads needed to produce one token. Once the
    /// source is exhausted this returns `Token::EndOfMessage` on every
    /// subsequent call.
    fn next_token(&mut self) -> Result<Token>;
}

impl<T: MessageReader + ?Sized> MessageReader for Box<T> {
    fn next_token(&mut self) -> Result<Token> {
        (**self).next_token()
    }
}

/// Reads one line from the source, stripping the trailing newline.
///
/// Returns `None` at end of input. An empty `Some` is a blank line, which is
/// meaningful to every encoding.
pub(crate) fn read_line(source: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if source.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
