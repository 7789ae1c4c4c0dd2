//! # message-translator
//!
//! Translates plain-text messages between three textual encodings:
//! unformatted uppercase English text, Morse code and an 8-bit binary code.
//!
//! Each encoding has a reader that turns raw lines into a stream of tokens
//! (letter, end-of-word, end-of-line, end-of-message) and a writer that
//! serializes that stream back out; a [`Translator`] pumps any reader into
//! any writer. Per-letter [`CodeTable`]s link the three encodings through a
//! common alphabet ordinal.
pub mod translate;

// Re-export the main types for convenience
pub use translate::{
    BinaryReader, BinaryWriter, CodeTable, EnglishReader, EnglishWriter, MessageKind,
    MessageReader, MessageWriter, MorseReader, MorseWriter, Result, Token, TranslateError,
    Translator,
};
