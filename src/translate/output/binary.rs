//! Writer producing 8-bit binary code.

use std::io::Write;

use super::MessageWriter;
use crate::translate::table::CodeTable;
use crate::translate::types::error::Result;
use crate::translate::types::models::BLANK_GROUP;

/// Serializes tokens as 8-bit binary groups.
///
/// Groups accumulate in a buffer that is flushed as one output line whenever
/// its length reaches a non-zero multiple of 8. A word break is the reserved
/// blank group written once; a sentence break is the same group written
/// twice. There is no dedicated sentence marker in the persisted form.
pub struct BinaryWriter<W> {
    sink: W,
    table: CodeTable,
    buffer: String,
}

impl<W: Write> BinaryWriter<W> {
    /// Creates a writer backed by the built-in binary table.
    pub fn new(sink: W) -> Result<Self> {
        Ok(Self::with_table(sink, CodeTable::binary()?))
    }

    /// Creates a writer with a caller-supplied code table.
    pub fn with_table(sink: W, table: CodeTable) -> Self {
        Self {
            sink,
            table,
            buffer: String::new(),
        }
    }

    fn write_group(&mut self, group: &str) -> Result<()> {
        self.buffer.push_str(group);
        if !self.buffer.is_empty() && self.buffer.len() % 8 == 0 {
            writeln!(self.sink, "{}", self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }
}

impl<W: Write> MessageWriter for BinaryWriter<W> {
    fn write_letter(&mut self, ordinal: usize) -> Result<()> {
        let code = self.table.code_of(ordinal)?.to_string();
        self.write_group(&code)
    }

    fn write_end_of_word(&mut self) -> Result<()> {
        self.write_group(BLANK_GROUP)
    }

    fn write_end_of_sentence(&mut self) -> Result<()> {
        self.write_group(BLANK_GROUP)?;
        self.write_group(BLANK_GROUP)
    }

    fn finish(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            writeln!(self.sink, "{}", self.buffer)?;
            self.buffer.clear();
        }
        self.sink.flush()?;
        Ok(())
    }
}
