//! Message writers: one per encoding.
//!
//! A writer serializes the token stream into its encoding's persisted form.
//! English and binary output accumulate encoded units in a line buffer until
//! a boundary forces a flush; Morse output is line-per-letter and needs no
//! buffering. `finish` flushes any buffered partial output and the sink, on
//! the success path or the first failure path.

mod binary;
mod english;
mod morse;

use super::types::error::Result;

pub use binary::BinaryWriter;
pub use english::EnglishWriter;
pub use morse::MorseWriter;

/// Uniform token-consuming interface over the three output encodings.
pub trait MessageWriter {
    /// Serializes the letter at `ordinal` into the target encoding.
    fn write_letter(&mut self, ordinal: usize) -> Result<()>;

    /// Serializes a word boundary.
    fn write_end_of_word(&mut self) -> Result<()>;

    /// Serializes a sentence/line boundary.
    fn write_end_of_sentence(&mut self) -> Result<()>;

    /// Flushes buffered partial output and the underlying sink.
    fn finish(&mut self) -> Result<()>;
}

impl<T: MessageWriter + ?Sized> MessageWriter for Box<T> {
    fn write_letter(&mut self, ordinal: usize) -> Result<()> {
        (**self).write_letter(ordinal)
    }

    fn write_end_of_word(&mut self) -> Result<()> {
        (**self).write_end_of_word()
    }

    fn write_end_of_sentence(&mut self) -> Result<()> {
        (**self).write_end_of_sentence()
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
