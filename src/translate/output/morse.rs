//! Writer producing Morse code.

use std::io::Write;

use super::MessageWriter;
use crate::translate::table::CodeTable;
use crate::translate::types::error::Result;

/// Serializes tokens as Morse code, one code group per output line.
///
/// No buffering: each letter is written immediately. A word break is one
/// blank line, a sentence break is two, which is exactly the distinction
/// [`MorseReader`](crate::MorseReader) recovers by counting blanks.
pub struct MorseWriter<W> {
    sink: W,
    table: CodeTable,
}

impl<W: Write> MorseWriter<W> {
    /// Creates a writer backed by the built-in Morse table.
    pub fn new(sink: W) -> Result<Self> {
        Ok(Self::with_table(sink, CodeTable::morse()?))
    }

    /// Creates a writer with a caller-supplied code table.
    pub fn with_table(sink: W, table: CodeTable) -> Self {
        Self { sink, table }
    }
}

impl<W: Write> MessageWriter for MorseWriter<W> {
    fn write_letter(&mut self, ordinal: usize) -> Result<()> {
        let code = self.table.code_of(ordinal)?;
        writeln!(self.sink, "{}", code)?;
        Ok(())
    }

    fn write_end_of_word(&mut self) -> Result<()> {
        writeln!(self.sink)?;
        Ok(())
    }

    fn write_end_of_sentence(&mut self) -> Result<()> {
        writeln!(self.sink)?;
        writeln!(self.sink)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
