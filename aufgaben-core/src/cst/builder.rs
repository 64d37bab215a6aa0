//! Incremental construction of a [`ParsedSource`].
//!
//! Front ends (and tests) push tokens and open/close rule nodes in document
//! order; the builder assigns token indices and line/column positions.
//!
//! ```ignore
//! let mut b = CstBuilder::new();
//! b.start_node(Rule::Sentence);
//! b.start_node(Rule::EndlessWords).words("Die Erde ist rund").finish_node();
//! b.token(TokenKind::Punctuation, ".");
//! b.finish_node();
//! let source = b.finish();
//! ```

use super::node::{Rule, SyntaxElement, SyntaxNode};
use super::token::{Token, TokenKind};
use super::ParsedSource;

#[derive(Debug)]
pub struct CstBuilder {
    tokens: Vec<Token>,
    stack: Vec<SyntaxNode>,
    roots: Vec<SyntaxNode>,
    line: usize,
    column: usize,
}

impl CstBuilder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            stack: Vec::new(),
            roots: Vec::new(),
            line: 1,
            column: 0,
        }
    }

    pub fn start_node(&mut self, rule: Rule) -> &mut Self {
        self.stack.push(SyntaxNode::new(rule, Vec::new()));
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        if let Some(node) = self.stack.pop() {
            self.attach(SyntaxElement::Node(node));
        }
        self
    }

    /// Push a token and attach it to the innermost open node.
    pub fn token(&mut self, kind: TokenKind, text: &str) -> &mut Self {
        let index = self.tokens.len();
        self.tokens
            .push(Token::new(kind, text, self.line, self.column));
        if kind == TokenKind::Newline {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += text.chars().count() + 1;
        }
        self.attach(SyntaxElement::Token(index));
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.token(TokenKind::Newline, "\n")
    }

    /// Push every whitespace-separated lexeme of `text`, classified by
    /// [`classify_lexeme`].
    pub fn words(&mut self, text: &str) -> &mut Self {
        for lexeme in text.split_whitespace() {
            self.token(classify_lexeme(lexeme), lexeme);
        }
        self
    }

    /// Close every open node and hand over the result.
    ///
    /// A single finished `program` node becomes the tree root. Anything else
    /// is wrapped in a `program` node, so the root rule is always `program`.
    pub fn finish(mut self) -> ParsedSource {
        while !self.stack.is_empty() {
            self.finish_node();
        }
        let root = if self.roots.len() == 1 && self.roots[0].rule == Rule::Program {
            self.roots.remove(0)
        } else {
            SyntaxNode::new(
                Rule::Program,
                self.roots.into_iter().map(SyntaxElement::Node).collect(),
            )
        };
        ParsedSource::new(self.tokens, root)
    }

    fn attach(&mut self, element: SyntaxElement) {
        match (self.stack.last_mut(), element) {
            (Some(parent), element) => parent.children.push(element),
            (None, SyntaxElement::Node(node)) => self.roots.push(node),
            // tokens outside any node are kept in the sequence only
            (None, SyntaxElement::Token(_)) => {}
        }
    }
}

impl Default for CstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Token kind of a single lexeme as the authoring grammar would tag it.
pub fn classify_lexeme(lexeme: &str) -> TokenKind {
    match lexeme {
        "." | "!" | "?" => TokenKind::Punctuation,
        "," => TokenKind::Connection,
        "(" => TokenKind::OpenParen,
        ")" => TokenKind::CloseParen,
        "[" => TokenKind::OpenBracket,
        "]" => TokenKind::CloseBracket,
        ":" => TokenKind::Colon,
        ";" => TokenKind::Semicolon,
        "-" => TokenKind::Dash,
        "/" => TokenKind::Slash,
        "\n" => TokenKind::Newline,
        _ if lexeme.chars().all(|c| c.is_ascii_digit()) => TokenKind::Number,
        _ if lexeme.chars().all(char::is_alphanumeric) => TokenKind::Letters,
        _ => TokenKind::Other,
    }
}
