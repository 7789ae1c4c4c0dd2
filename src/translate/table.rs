//! Ordinal-indexed code tables linking the canonical alphabet to one
//! encoding's representation of each letter.
//!
//! A table is a line-oriented resource where line *i* (0-indexed) is
//! `<symbol><code>`: a one-character symbol followed by the rest of the line
//! as its code. The line index is the entry's ordinal, the common key that
//! links all three encodings. Tables are built once and immutable afterward.

use std::io::BufRead;
use log::debug;

use super::types::error::{Result, TranslateError};

const MORSE_TABLE: &str = include_str!("../../data/morse_table.txt");
const BINARY_TABLE: &str = include_str!("../../data/binary_table.txt");

/// One code-table row: a canonical letter and its encoded representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub symbol: char,
    pub code: String,
}

/// An immutable mapping between alphabet ordinals and encoded letters.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: Vec<TableEntry>,
}

impl CodeTable {
    /// Reads a table from a line source.
    ///
    /// # Errors
    /// Returns [`TranslateError::TableFormat`] if a line does not decompose
    /// into a one-character symbol plus a non-empty code, or if two lines
    /// carry the same code; I/O failures surface as [`TranslateError::Io`].
    pub fn load(source: impl BufRead) -> Result<Self> {
        let mut entries: Vec<TableEntry> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line = line?;
            let mut chars = line.chars();
            let symbol = chars.next().ok_or_else(|| TranslateError::TableFormat {
                line: index,
                reason: "empty line".to_string(),
            })?;
            let code = chars.as_str().to_string();
            if code.is_empty() {
                return Err(TranslateError::TableFormat {
                    line: index,
                    reason: format!("symbol {:?} has no code", symbol),
                });
            }
            if entries.iter().any(|entry| entry.code == code) {
                return Err(TranslateError::TableFormat {
                    line: index,
                    reason: format!("duplicate code {:?}", code),
                });
            }
            entries.push(TableEntry { symbol, code });
        }

        debug!("Code table loaded: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Parses a table from in-memory text (used for the embedded resources).
    pub fn parse(text: &str) -> Result<Self> {
        Self::load(text.as_bytes())
    }

    /// The built-in Morse table (A-Z).
    pub fn morse() -> Result<Self> {
        Self::parse(MORSE_TABLE)
    }

    /// The built-in 8-bit binary table (A-Z, codes are the ASCII bit patterns).
    pub fn binary() -> Result<Self> {
        Self::parse(BINARY_TABLE)
    }

    /// The English table, generated rather than loaded: each letter's code is
    /// the letter itself.
    pub fn english() -> Self {
        let entries = ('A'..='Z')
            .map(|symbol| TableEntry {
                symbol,
                code: symbol.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Returns the ordinal of the entry whose code is `code`.
    ///
    /// A code with no matching entry is an [`TranslateError::UnknownCode`]
    /// error; there is no fallback ordinal.
    pub fn ordinal_of(&self, code: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.code == code)
            .ok_or_else(|| TranslateError::UnknownCode(code.to_string()))
    }

    /// Returns the code of the entry at `ordinal`.
    pub fn code_of(&self, ordinal: usize) -> Result<&str> {
        self.entries
            .get(ordinal)
            .map(|entry| entry.code.as_str())
            .ok_or(TranslateError::OrdinalOutOfRange {
                ordinal,
                len: self.entries.len(),
            })
    }

    /// Returns true if some entry carries exactly this code.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
