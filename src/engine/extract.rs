use std::io::Read;

use crate::engine::{ExtractError, Token, TokenKind, Tokenizer, normalize_target};

/// Token parsing state for one file's token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    /// Not inside an import clause. Initial state, and a legal state to
    /// end a run in.
    #[default]
    Idle,
    /// An import keyword has been seen and its clause is still open.
    InImportClause,
}

/// The token classifications that parameterize the state machine for one
/// language: which keywords open an import clause, which token kinds carry
/// a module path, and which punctuation closes the clause.
///
/// The machine itself is written once; each supported language contributes
/// one profile instead of its own copy of the machine.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub import_keywords: &'static [&'static str],
    pub path_literal_kinds: &'static [TokenKind],
    pub clause_terminators: &'static [&'static str],
}

impl LanguageProfile {
    fn is_import_keyword(&self, text: &str) -> bool {
        self.import_keywords.contains(&text)
    }

    fn is_path_literal(&self, kind: TokenKind) -> bool {
        self.path_literal_kinds.contains(&kind)
    }

    fn is_clause_terminator(&self, text: &str) -> bool {
        self.clause_terminators.contains(&text)
    }
}

/// Token-driven import extractor.
///
/// Walks a token sequence once, in order, and emits the normalized import
/// targets it recognizes. The machine tracks only "am I inside a plausible
/// import clause" and captures every path literal seen while inside one;
/// it deliberately does not validate full import-statement grammar, which
/// tolerates bound names and destructuring between the keyword and the
/// path at the cost of occasional false positives.
///
/// It is not thread safe. Give each concurrent caller its own instance;
/// instances share no state.
#[derive(Debug)]
pub struct ImportExtractor {
    profile: LanguageProfile,
    state: State,
    output: Vec<String>,
}

impl ImportExtractor {
    pub fn new(profile: LanguageProfile) -> Self {
        Self {
            profile,
            state: State::Idle,
            output: Vec::new(),
        }
    }

    /// Extract normalized import targets from source content.
    ///
    /// The reader is consumed fully before tokenization; a read or
    /// tokenize failure aborts the run with no output. A file with no
    /// recognized imports yields `Ok` with an empty list.
    ///
    /// The instance is reset on entry and again before returning, so
    /// back-to-back runs on the same instance are isolated from each
    /// other.
    pub fn parse<R: Read>(
        &mut self,
        mut reader: R,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Vec<String>, ExtractError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.parse_str(&source, tokenizer)
    }

    /// Extract from source text already in memory.
    pub fn parse_str(
        &mut self,
        source: &str,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Vec<String>, ExtractError> {
        self.init();

        let tokens = tokenizer.tokenize(source)?;
        for token in &tokens {
            self.process_token(token);
        }

        let output = std::mem::take(&mut self.output);
        self.init();
        Ok(output)
    }

    fn init(&mut self) {
        self.state = State::Idle;
        self.output.clear();
    }

    fn process_token(&mut self, token: &Token<'_>) {
        match token.kind {
            TokenKind::Keyword => self.process_keyword(token.text),
            kind if self.profile.is_path_literal(kind) => {
                self.process_path_literal(token.text);
            }
            TokenKind::Punct => self.process_punctuation(token.text),
            // Identifiers, operators, comments and the rest carry no
            // signal for import detection.
            _ => {}
        }
    }

    fn process_keyword(&mut self, text: &str) {
        // A fresh import keyword restarts the clause; there is no stack.
        if self.profile.is_import_keyword(text) {
            self.state = State::InImportClause;
        } else {
            self.state = State::Idle;
        }
    }

    fn process_path_literal(&mut self, text: &str) {
        match self.state {
            // Every literal in the clause is captured, not just the
            // first; some grammars allow multiple sources per statement.
            State::InImportClause => self.output.push(normalize_target(text)),
            State::Idle => {}
        }
    }

    fn process_punctuation(&mut self, text: &str) {
        if self.state == State::InImportClause && self.profile.is_clause_terminator(text) {
            self.state = State::Idle;
        }
    }
}
