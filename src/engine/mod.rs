//! Core dependency extraction engine.
//!
//! The engine walks a token sequence once through a two-state machine and
//! collects normalized import targets. Tokenization is an injected
//! capability (see [`Tokenizer`]); the engine never lexes source text
//! itself, so the state machine stays portable across lexer
//! implementations.

mod error;
mod extract;
mod normalize;
mod token;

pub use error::{ExtractError, LexError};
pub use extract::{ImportExtractor, LanguageProfile, State};
pub use normalize::normalize_target;
pub use token::{Token, TokenKind, Tokenizer};
