//! Token vocabulary handed over by the front end.

use crate::cst::TokenSpan;
use serde::{Deserialize, Serialize};

/// Type tag of a single token.
///
/// The set is closed: the front end maps every literal of the authoring grammar
/// onto one of these kinds. Keyword kinds select the exercise kind of a task or
/// the verdict of a true/false answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Letters,
    Number,
    /// Sentence-ending mark: `.`, `!` or `?`
    Punctuation,
    /// `,`
    Connection,
    Newline,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Colon,
    Semicolon,
    Dash,
    Slash,
    RightOrFalse,
    Sorting,
    Matching,
    Marking,
    ClozeText,
    CorrectionText,
    ChoiceText,
    AnswerTrue,
    AnswerFalse,
    Other,
}

impl TokenKind {
    /// Letters and numbers. Keywords are words on the page too.
    pub fn is_wordish(self) -> bool {
        matches!(self, TokenKind::Letters | TokenKind::Number) || self.is_keyword()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::RightOrFalse
                | TokenKind::Sorting
                | TokenKind::Matching
                | TokenKind::Marking
                | TokenKind::ClozeText
                | TokenKind::CorrectionText
                | TokenKind::ChoiceText
                | TokenKind::AnswerTrue
                | TokenKind::AnswerFalse
        )
    }

    /// Tokens that never take a space in front of them.
    pub fn suppresses_space_before(self) -> bool {
        matches!(
            self,
            TokenKind::Punctuation
                | TokenKind::Connection
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
                | TokenKind::Semicolon
                | TokenKind::Slash
        )
    }

    /// Tokens that never take a space after them.
    pub fn suppresses_space_after(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::OpenBracket
                | TokenKind::Dash
                | TokenKind::Colon
                | TokenKind::Slash
        )
    }

    /// Short upper-case name used by the `token-simple` inspection output.
    pub fn simple_name(self) -> &'static str {
        match self {
            TokenKind::Letters => "LETTERS",
            TokenKind::Number => "NUMBER",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Connection => "CONNECTION",
            TokenKind::Newline => "NEWLINE",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dash => "DASH",
            TokenKind::Slash => "SLASH",
            TokenKind::RightOrFalse => "RIGHT_OR_FALSE",
            TokenKind::Sorting => "SORTING",
            TokenKind::Matching => "MATCHING",
            TokenKind::Marking => "MARKING",
            TokenKind::ClozeText => "CLOZE_TEXT",
            TokenKind::CorrectionText => "CORRECTION_TEXT",
            TokenKind::ChoiceText => "CHOICE_TEXT",
            TokenKind::AnswerTrue => "ANSWER_TRUE",
            TokenKind::AnswerFalse => "ANSWER_FALSE",
            TokenKind::Other => "OTHER",
        }
    }
}

/// A single token with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

/// Read-only view over the token sequence of one parsed source.
///
/// Lowering functions receive this view as an argument on every call; nothing
/// in the pipeline keeps a token stream of its own.
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'t> {
    tokens: &'t [Token],
}

impl<'t> Tokens<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens }
    }

    pub fn get(&self, index: usize) -> Option<&'t Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &'t [Token] {
        self.tokens
    }

    /// Tokens covered by an inclusive span, clamped to the sequence.
    pub fn range(&self, span: TokenSpan) -> &'t [Token] {
        if span.start > span.end || span.start >= self.tokens.len() {
            return &[];
        }
        let end = span.end.min(self.tokens.len() - 1);
        &self.tokens[span.start..=end]
    }
}
