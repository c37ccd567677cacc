//! Logos-based ECMAScript lexer shared by the JavaScript and TypeScript
//! profiles.

use logos::Logos;

use crate::engine::{LexError, Token, TokenKind, Tokenizer};

/// Reserved words, sorted for binary search. Contextual keywords (`from`,
/// `as`, `of`, `async`, ...) lex as plain identifiers so they cannot close
/// an open import clause.
const KEYWORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\n\u{FEFF}]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    // Longest-match keeps this ahead of the operator rule for `/*`.
    // `\*+` before the closing `/` admits bodies that end in stars.
    // Written in the unrolled form because logos 0.15 miscompiles the
    // equivalent `/\*([^*]|\*+[^*/])*\*+/`.
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Str,

    #[regex(r"`([^`\\]|\\.)*`")]
    Template,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    #[regex(r"[{}()\[\];,]")]
    Punct,

    #[regex(r"[-+*/%=<>!&|^~?:.@#]+")]
    Operator,
}

impl RawToken {
    fn classify(self, text: &str) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment | RawToken::BlockComment => TokenKind::Comment,
            RawToken::Str => TokenKind::Str,
            RawToken::Template => TokenKind::Template,
            RawToken::Ident if KEYWORDS.binary_search(&text).is_ok() => TokenKind::Keyword,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Number => TokenKind::Number,
            RawToken::Punct => TokenKind::Punct,
            RawToken::Operator => TokenKind::Operator,
        }
    }
}

/// Tokenizer for ECMAScript-family sources (JS, JSX, TS, TSX).
///
/// The lexer is deliberately shallow: it classifies rather than parses,
/// which is all the import extractor needs. An unclassifiable character
/// (e.g. a stray unterminated quote) fails the whole run.
///
/// Known limitation: regex literals are not recognized, since telling `/`
/// as division from `/` as a regex delimiter needs parser context. A
/// regex literal containing a quote character (`/it's/`) therefore reads
/// as an unterminated string and fails the file.
pub struct EcmaTokenizer;

impl Tokenizer for EcmaTokenizer {
    fn tokenize<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, LexError> {
        let mut lexer = RawToken::lexer(source);
        let mut tokens = Vec::new();

        while let Some(raw) = lexer.next() {
            let text = lexer.slice();
            let raw = raw.map_err(|()| LexError::new(lexer.span().start, text))?;
            tokens.push(Token::new(raw.classify(text), text));
        }

        Ok(tokens)
    }
}
