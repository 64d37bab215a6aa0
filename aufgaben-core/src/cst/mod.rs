//! Concrete syntax tree handed over by the external front end.
//!
//!     The core never tokenizes or parses author text. A front end produces a
//!     [`ParsedSource`]: the ordered token sequence plus a tree of rule nodes whose
//!     leaves are indices into that sequence. Everything downstream only walks the
//!     tree and slices the tokens through a [`Tokens`] view.
//!
//!     All types are serde (de)serializable so the hand-over can cross a process
//!     boundary as JSON. The [`CstBuilder`] assembles the same shape in memory.

pub mod builder;
pub mod node;
pub mod token;

pub use builder::{classify_lexeme, CstBuilder};
pub use node::{Rule, SyntaxElement, SyntaxNode, TokenSpan};
pub use token::{Token, TokenKind, Tokens};

use serde::{Deserialize, Serialize};

/// A syntax error reported by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}:{} {}", self.line, self.column, self.message)
    }
}

/// Tokens, tree and front-end diagnostics of one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSource {
    pub tokens: Vec<Token>,
    pub root: SyntaxNode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSource {
    pub fn new(tokens: Vec<Token>, root: SyntaxNode) -> Self {
        Self {
            tokens,
            root,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn view(&self) -> Tokens<'_> {
        Tokens::new(&self.tokens)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
