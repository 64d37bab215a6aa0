//! Rule nodes of the concrete syntax tree.

use super::token::{Token, TokenKind, Tokens};
use serde::{Deserialize, Serialize};

/// Grammar rules the lowering knows how to read.
///
/// Names follow the authoring grammar (`snake_case` on the wire), so a front end
/// can emit its parse tree without a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Program,
    TaskDefinition,
    Task,
    EndlessWords,
    Word,
    Sentence,
    QuestionOrStatement,
    TrueFalseTask,
    TrueFalseAnswer,
    Reason,
    SortingTask,
    Item,
    PositiveTaskPoint,
    NegativeTaskPoint,
    MatchingTask,
    MatchingQuestionOrStatement,
    MatchingItem,
    MarkingTask,
    MarkingText,
    MarkedSentence,
    MarkedWord,
    MarkedWordPoint,
    ClozeTask,
    ClozeText,
    ClozeSentence,
    ClozeWord,
    CorrectionTask,
    CorrectionText,
    CorrectionSentence,
    CorrectionWord,
    ChoiceTask,
    CorrectChoice,
    FalseChoices,
}

impl Rule {
    /// Grammar name of the rule, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Program => "program",
            Rule::TaskDefinition => "task_definition",
            Rule::Task => "task",
            Rule::EndlessWords => "endless_words",
            Rule::Word => "word",
            Rule::Sentence => "sentence",
            Rule::QuestionOrStatement => "question_or_statement",
            Rule::TrueFalseTask => "true_false_task",
            Rule::TrueFalseAnswer => "true_false_answer",
            Rule::Reason => "reason",
            Rule::SortingTask => "sorting_task",
            Rule::Item => "item",
            Rule::PositiveTaskPoint => "positive_task_point",
            Rule::NegativeTaskPoint => "negative_task_point",
            Rule::MatchingTask => "matching_task",
            Rule::MatchingQuestionOrStatement => "matching_question_or_statement",
            Rule::MatchingItem => "matching_item",
            Rule::MarkingTask => "marking_task",
            Rule::MarkingText => "marking_text",
            Rule::MarkedSentence => "marked_sentence",
            Rule::MarkedWord => "marked_word",
            Rule::MarkedWordPoint => "marked_word_point",
            Rule::ClozeTask => "cloze_task",
            Rule::ClozeText => "cloze_text",
            Rule::ClozeSentence => "cloze_sentence",
            Rule::ClozeWord => "cloze_word",
            Rule::CorrectionTask => "correction_task",
            Rule::CorrectionText => "correction_text",
            Rule::CorrectionSentence => "correction_sentence",
            Rule::CorrectionWord => "correction_word",
            Rule::ChoiceTask => "choice_task",
            Rule::CorrectChoice => "correct_choice",
            Rule::FalseChoices => "false_choices",
        }
    }
}

/// Inclusive range of token indices covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A child of a rule node: either a nested rule or a token index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyntaxElement {
    Token(usize),
    Node(SyntaxNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub rule: Rule,
    #[serde(default)]
    pub children: Vec<SyntaxElement>,
}

impl SyntaxNode {
    pub fn new(rule: Rule, children: Vec<SyntaxElement>) -> Self {
        Self { rule, children }
    }

    /// Direct child nodes with the given rule, in document order.
    pub fn child_nodes(&self, rule: Rule) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.children.iter().filter_map(move |child| match child {
            SyntaxElement::Node(node) if node.rule == rule => Some(node),
            _ => None,
        })
    }

    /// First direct child node with the given rule.
    pub fn child_node(&self, rule: Rule) -> Option<&SyntaxNode> {
        self.child_nodes(rule).next()
    }

    /// Direct child tokens, in document order.
    pub fn child_tokens<'t>(&'t self, tokens: Tokens<'t>) -> impl Iterator<Item = &'t Token> + 't {
        self.children.iter().filter_map(move |child| match child {
            SyntaxElement::Token(index) => tokens.get(*index),
            SyntaxElement::Node(_) => None,
        })
    }

    /// First direct child token of the given kind.
    pub fn child_token<'t>(&'t self, tokens: Tokens<'t>, kind: TokenKind) -> Option<&'t Token> {
        self.child_tokens(tokens).find(|token| token.kind == kind)
    }

    pub fn has_token(&self, tokens: Tokens<'_>, kind: TokenKind) -> bool {
        self.child_token(tokens, kind).is_some()
    }

    pub fn first_token(&self) -> Option<usize> {
        self.children.iter().find_map(|child| match child {
            SyntaxElement::Token(index) => Some(*index),
            SyntaxElement::Node(node) => node.first_token(),
        })
    }

    pub fn last_token(&self) -> Option<usize> {
        self.children.iter().rev().find_map(|child| match child {
            SyntaxElement::Token(index) => Some(*index),
            SyntaxElement::Node(node) => node.last_token(),
        })
    }

    /// Token span covered by this node, `None` when it holds no tokens.
    pub fn span(&self) -> Option<TokenSpan> {
        Some(TokenSpan::new(self.first_token()?, self.last_token()?))
    }

    /// Concatenated raw text of every token under this node, without spacing.
    pub fn raw_text(&self, tokens: Tokens<'_>) -> String {
        match self.span() {
            Some(span) => tokens.range(span).iter().map(|t| t.text.as_str()).collect(),
            None => String::new(),
        }
    }
}
