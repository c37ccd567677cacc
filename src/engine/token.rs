use crate::engine::LexError;

/// A classified lexical unit: a kind plus the literal text as it appeared
/// in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Closed set of token classes.
///
/// Kinds without a row in the extractor's transition table are no-ops
/// during import detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Ident,
    Str,
    Template,
    Number,
    Punct,
    Operator,
    Comment,
    Whitespace,
}

/// A language-specific lexer supplied by the caller.
///
/// The engine consumes whatever classification it is given; extraction
/// quality is bounded by the quality of the token stream.
pub trait Tokenizer {
    /// Tokenize the full source text, in file order.
    ///
    /// Content the lexer cannot classify is an error, not a partial
    /// stream.
    fn tokenize<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, LexError>;
}
