use std::io;

use thiserror::Error;

/// The lexer could not classify part of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected input at byte {offset}: {snippet:?}")]
pub struct LexError {
    /// Byte offset of the first unclassifiable character.
    pub offset: usize,
    /// The offending slice of source text.
    pub snippet: String,
}

impl LexError {
    pub fn new(offset: usize, snippet: impl Into<String>) -> Self {
        Self {
            offset,
            snippet: snippet.into(),
        }
    }
}

/// Failure modes of a single extraction run.
///
/// Both variants abort the run before the state machine executes; a file
/// that fails contributes no dependency data, partial or otherwise.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read source content: {0}")]
    Read(#[from] io::Error),

    #[error("failed to tokenize source content: {0}")]
    Tokenize(#[from] LexError),
}
