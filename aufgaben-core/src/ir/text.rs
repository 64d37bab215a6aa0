//! Readers for the small shapes every task kind is built from: free-text runs,
//! words, sentences and point literals.

use super::nodes::{Punctuation, Sentence, TaskPoints};
use crate::cst::{Rule, SyntaxNode, TokenKind, Tokens};
use crate::detokenizer::detokenize_opt;
use crate::error::Error;

/// A point literal that could not be accepted.
///
/// Readers below the task level do not know the task header; the task lowering
/// attaches it through [`PointError::for_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    Malformed {
        literal: String,
        line: usize,
        column: usize,
    },
    NonPositive {
        value: i32,
        line: usize,
        column: usize,
    },
}

impl PointError {
    pub fn for_task(self, header: &str) -> Error {
        let header = header.to_string();
        match self {
            PointError::Malformed {
                literal,
                line,
                column,
            } => Error::MalformedNumber {
                header,
                literal,
                line,
                column,
            },
            PointError::NonPositive {
                value,
                line,
                column,
            } => Error::NonPositivePoints {
                header,
                value,
                line,
                column,
            },
        }
    }
}

pub type ReadResult<T> = std::result::Result<T, PointError>;

/// Detokenized text of an `endless_words` run, `""` when absent.
pub fn read_endless_words(node: Option<&SyntaxNode>, tokens: Tokens<'_>) -> String {
    detokenize_opt(node, tokens)
}

/// A `word` node read through the detokenizer, so split digits stay one number.
pub fn read_word(node: Option<&SyntaxNode>, tokens: Tokens<'_>) -> String {
    detokenize_opt(node, tokens)
}

/// Punctuation token directly under `node`, defaulting to `.`.
pub fn read_punctuation(node: &SyntaxNode, tokens: Tokens<'_>) -> Punctuation {
    let token = node.child_token(tokens, TokenKind::Punctuation);
    match token.and_then(|t| t.text.chars().next()).and_then(Punctuation::from_char) {
        Some(punctuation) => punctuation,
        None => {
            tracing::warn!(
                rule = ?node.rule,
                found = token.map(|t| t.text.as_str()).unwrap_or(""),
                "sentence without a usable end mark, defaulting to '.'"
            );
            Punctuation::default()
        }
    }
}

/// `sentence: endless_words PUNCTUATION`
pub fn read_sentence(node: &SyntaxNode, tokens: Tokens<'_>) -> Sentence {
    Sentence {
        text: read_endless_words(node.child_node(Rule::EndlessWords), tokens),
        punctuation: read_punctuation(node, tokens),
    }
}

/// The sentence inside the `question_or_statement` child of a task line.
pub fn read_question(line: &SyntaxNode, tokens: Tokens<'_>) -> Sentence {
    line.child_node(Rule::QuestionOrStatement)
        .and_then(|q| q.child_node(Rule::Sentence))
        .map(|s| read_sentence(s, tokens))
        .unwrap_or_default()
}

/// A sentence made of the `endless_words` child of `node`, used where the
/// grammar only supplied a bare run. `None` when there is no such run.
pub fn read_bare_sentence(node: &SyntaxNode, tokens: Tokens<'_>) -> Option<Sentence> {
    node.child_node(Rule::EndlessWords).map(|words| {
        Sentence::new(read_endless_words(Some(words), tokens), Punctuation::default())
    })
}

/// Plain base-10 integer: optional sign, digits, nothing else.
pub fn parse_int_strict(literal: &str) -> Option<i32> {
    literal.parse::<i32>().ok()
}

/// Value of a point literal node, which may be split over several tokens.
pub fn read_point_literal(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<i32> {
    let literal = node.raw_text(tokens);
    parse_int_strict(&literal).ok_or_else(|| {
        let (line, column) = position(node, tokens);
        PointError::Malformed {
            literal,
            line,
            column,
        }
    })
}

/// The `positive_task_point` child of `parent`, which must exist and be ≥ 1.
pub fn read_required_points(parent: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<i32> {
    let Some(node) = parent.child_node(Rule::PositiveTaskPoint) else {
        let (line, column) = position(parent, tokens);
        return Err(PointError::Malformed {
            literal: String::new(),
            line,
            column,
        });
    };
    read_positive(node, tokens)
}

/// Scoring of a sorting or matching line from its optional point literal.
pub fn read_task_points(line: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<TaskPoints> {
    let total = line
        .child_node(Rule::PositiveTaskPoint)
        .map(|node| read_positive(node, tokens))
        .transpose()?;
    Ok(TaskPoints::from_total(total))
}

fn read_positive(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<i32> {
    let value = read_point_literal(node, tokens)?;
    if value < 1 {
        let (line, column) = position(node, tokens);
        return Err(PointError::NonPositive {
            value,
            line,
            column,
        });
    }
    Ok(value)
}

fn position(node: &SyntaxNode, tokens: Tokens<'_>) -> (usize, usize) {
    node.first_token()
        .and_then(|index| tokens.get(index))
        .map(|t| (t.line, t.column))
        .unwrap_or((0, 0))
}
