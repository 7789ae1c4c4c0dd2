//! Shared data structures for the translation pipeline.

use super::error::{Result, TranslateError};

/// The 8-bit group reserved for a blank (ASCII space), used by the binary
/// encoding as its word-boundary marker.
pub const BLANK_GROUP: &str = "00100000";

/// A unit of meaning produced by a [`MessageReader`](crate::MessageReader)
/// and consumed by a [`MessageWriter`](crate::MessageWriter).
///
/// The three encodings persist word and line boundaries very differently
/// (a blank character, a blank line, a reserved bit group), so readers
/// normalize them into these tokens and writers re-serialize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A letter, identified by its zero-based position in the canonical
    /// A-Z alphabet.
    Letter(usize),
    /// A word boundary.
    EndOfWord,
    /// A line boundary; doubles as end-of-sentence.
    EndOfLine,
    /// The source is exhausted. Readers keep returning this once reached.
    EndOfMessage,
}

/// The three message encodings a file can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    English,
    Morse,
    Binary,
}

impl MessageKind {
    /// The file-stem suffix marking this encoding, e.g. `hello_MORSE.txt`.
    pub fn suffix(&self) -> &'static str {
        match self {
            MessageKind::English => "_ENGLISH",
            MessageKind::Morse => "_MORSE",
            MessageKind::Binary => "_BINARY",
        }
    }

    /// Infers the encoding from a file stem (file name without `.txt`).
    ///
    /// The suffix after the last `_` decides the kind; a stem with no
    /// underscore or an unrecognized suffix is an error.
    pub fn from_stem(stem: &str) -> Result<Self> {
        let suffix = match stem.rfind('_') {
            Some(pos) => &stem[pos..],
            None => return Err(TranslateError::UnknownMessageType(stem.to_string())),
        };
        match suffix {
            "_ENGLISH" => Ok(MessageKind::English),
            "_MORSE" => Ok(MessageKind::Morse),
            "_BINARY" => Ok(MessageKind::Binary),
            _ => Err(TranslateError::UnknownMessageType(stem.to_string())),
        }
    }

    /// Name of the output file for a translation of `stem` into this encoding.
    pub fn output_file_name(&self, stem: &str) -> String {
        format!("{}{}.txt", stem, self.suffix())
    }
}
