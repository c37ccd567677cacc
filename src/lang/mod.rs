//! Supported source languages: extension dispatch, lexers, and the
//! per-language extraction profiles.

mod ecma;

pub use ecma::EcmaTokenizer;

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::engine::{LanguageProfile, TokenKind, Tokenizer};

const ECMA_PROFILE: LanguageProfile = LanguageProfile {
    import_keywords: &["import"],
    path_literal_kinds: &[TokenKind::Str],
    clause_terminators: &[";"],
};

/// Languages the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// Dispatch on file extension. `None` means the file is not scannable.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js" | "jsx" | "mjs" | "cjs") => Some(Self::JavaScript),
            Some("ts" | "tsx" | "mts" | "cts") => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Extraction profile for this language's import grammar.
    ///
    /// The two profiles currently coincide; they stay separate entries so
    /// one language can diverge without touching the other.
    pub fn profile(self) -> LanguageProfile {
        match self {
            Self::JavaScript => ECMA_PROFILE,
            Self::TypeScript => ECMA_PROFILE,
        }
    }

    /// The lexer to feed this language's files through.
    pub fn tokenizer(self) -> Box<dyn Tokenizer> {
        match self {
            Self::JavaScript | Self::TypeScript => Box::new(EcmaTokenizer),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::JavaScript => write!(f, "javascript"),
            Language::TypeScript => write!(f, "typescript"),
        }
    }
}
