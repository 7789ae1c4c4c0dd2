//! The generic translation loop.

use log::{debug, info, trace};

use super::input::MessageReader;
use super::output::MessageWriter;
use super::types::error::Result;
use super::types::models::Token;

/// Drives one [`MessageReader`] against one [`MessageWriter`] until the
/// source is exhausted, without knowing which encodings are involved.
///
/// A `Translator` owns its reader and writer exclusively and is one-shot:
/// [`translate`](Translator::translate) consumes it, so a finished or failed
/// translation cannot be re-run. On every exit path, including failures, the
/// writer is finished exactly once so the sink is flushed and released; the
/// reader is released when the consumed `Translator` is dropped.
pub struct Translator<R, W> {
    reader: R,
    writer: W,
}

impl<R: MessageReader, W: MessageWriter> Translator<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Translates the whole message, all-or-nothing.
    ///
    /// Pulls tokens from the reader and dispatches each to the matching
    /// writer operation until `EndOfMessage`. The first error from either
    /// side aborts the translation and propagates to the caller after a
    /// best-effort `finish` of the writer; no retries are attempted.
    pub fn translate(mut self) -> Result<()> {
        debug!("Translation started");
        let outcome = self.pump();
        let finished = self.writer.finish();
        match outcome {
            Ok(tokens) => {
                finished?;
                info!("Translation complete: {} tokens", tokens);
                Ok(())
            }
            Err(e) => {
                // The pump error is the one to report; a secondary finish
                // failure must not mask it.
                let _ = finished;
                Err(e)
            }
        }
    }

    fn pump(&mut self) -> Result<u64> {
        let mut tokens = 0u64;
        loop {
            let token = self.reader.next_token()?;
            trace!("Token: {:?}", token);
            match token {
                Token::Letter(ordinal) => self.writer.write_letter(ordinal)?,
                Token::EndOfWord => self.writer.write_end_of_word()?,
                Token::EndOfLine => self.writer.write_end_of_sentence()?,
                Token::EndOfMessage => return Ok(tokens),
            }
            tokens += 1;
        }
    }
}
