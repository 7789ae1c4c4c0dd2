//! Core message translation module

pub mod input;
pub mod output;
pub mod table;
pub mod types;

mod translator;

pub use input::{BinaryReader, EnglishReader, MessageReader, MorseReader};
pub use output::{BinaryWriter, EnglishWriter, MessageWriter, MorseWriter};
pub use table::CodeTable;
pub use translator::Translator;
pub use types::error::{Result, TranslateError};
pub use types::models::{MessageKind, Token, BLANK_GROUP};
