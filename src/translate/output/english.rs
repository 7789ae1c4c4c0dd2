//! Writer producing unformatted uppercase English text.

use std::io::Write;

use super::MessageWriter;
use crate::translate::table::CodeTable;
use crate::translate::types::error::Result;

/// Serializes tokens as plain English text, one sentence per output line.
///
/// Letters and word-break blanks accumulate in a line buffer; the buffer is
/// written out as one line at each sentence boundary.
pub struct EnglishWriter<W> {
    sink: W,
    table: CodeTable,
    buffer: String,
}

impl<W: Write> EnglishWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            table: CodeTable::english(),
            buffer: String::new(),
        }
    }
}

impl<W: Write> MessageWriter for EnglishWriter<W> {
    fn write_letter(&mut self, ordinal: usize) -> Result<()> {
        let code = self.table.code_of(ordinal)?;
        self.buffer.push_str(code);
        Ok(())
    }

    fn write_end_of_word(&mut self) -> Result<()> {
        self.buffer.push(' ');
        Ok(())
    }

    fn write_end_of_sentence(&mut self) -> Result<()> {
        writeln!(self.sink, "{}", self.buffer)?;
        self.buffer.clear();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // A partial sentence still has to reach the sink; an empty buffer
        // must not produce a spurious blank line.
        if !self.buffer.is_empty() {
            writeln!(self.sink, "{}", self.buffer)?;
            self.buffer.clear();
        }
        self.sink.flush()?;
        Ok(())
    }
}
