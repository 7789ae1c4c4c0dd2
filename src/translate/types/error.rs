//! Custom error types for the message-translator crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// An error originating from I/O operations on the source or sink.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// An input symbol (character, Morse group or binary group) does not
    /// belong to the encoding being read.
    #[error("Invalid symbol {0:?} in input message")]
    InvalidSymbol(String),

    /// A binary input line whose length is not a multiple of 8 bits.
    #[error("Binary line {line:?} has {len} bits, expected a multiple of 8")]
    InvalidCodeLength { line: String, len: usize },

    /// A binary group containing a character other than '0' or '1'.
    #[error("Invalid bit {bit:?} in binary group {group:?}")]
    InvalidBit { group: String, bit: char },

    /// A code-table resource line that does not decompose into a one-character
    /// symbol followed by a non-empty code, or violates code uniqueness.
    #[error("Malformed code table at line {line}: {reason}")]
    TableFormat { line: usize, reason: String },

    /// A code-to-ordinal lookup found no matching table entry.
    #[error("Code {0:?} not present in the code table")]
    UnknownCode(String),

    /// An ordinal-to-code lookup outside the table bounds.
    #[error("Ordinal {ordinal} out of range for a table of {len} entries")]
    OrdinalOutOfRange { ordinal: usize, len: usize },

    /// A file name whose stem carries no recognized encoding suffix.
    #[error("File name {0:?} has no _ENGLISH, _MORSE or _BINARY suffix")]
    UnknownMessageType(String),
}

/// A convenience `Result` type alias using the crate's `TranslateError` type.
pub type Result<T> = std::result::Result<T, TranslateError>;
