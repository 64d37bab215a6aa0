//! Lowering of a concrete syntax tree into the IR.
//!
//!     `program` holds one `task_definition` per exercise:
//!
//!         task_definition: endless_words task
//!
//!     The header is the text before the kind keyword. The `task` node carries the
//!     keyword token (`RIGHT_OR_FALSE`, `SORTING`, ...) and the per-kind line nodes;
//!     the keyword decides which extractor runs. A `task` without a known keyword
//!     lowers to [`TaskBody::Unrecognized`], which the domain converter rejects.
//!
//!     Every extractor is a function of (node, token view); nothing holds on to
//!     the token sequence between calls.

use super::nodes::{
    AnnotatedTaskIr, Answer, ChoiceLine, ChoiceOption, MatchingLine, MatchingPair,
    MatchingQuestion, Program, SortingLine, Task, TaskBody, TrueFalseLine,
};
use super::segments::{read_annotated_task, Annotated, Cloze, Correction, Marking, SentenceOrder};
use super::text::{
    read_bare_sentence, read_endless_words, read_point_literal, read_punctuation, read_question,
    read_required_points, read_sentence, read_task_points, read_word, ReadResult,
};
use crate::cst::{ParsedSource, Rule, SyntaxNode, TokenKind, Tokens};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Knobs of the lowering stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoweringOptions {
    pub sentence_order: SentenceOrder,
}

/// Lower a whole parsed source. Fails before touching the tree when the front
/// end reported syntax errors, and on the first task that cannot be lowered.
pub fn lower_program(source: &ParsedSource, options: &LoweringOptions) -> Result<Program> {
    if let Some(first) = source.diagnostics.first() {
        return Err(Error::SyntaxErrors {
            count: source.diagnostics.len(),
            first: first.clone(),
        });
    }

    let tokens = source.view();
    let tasks = source
        .root
        .child_nodes(Rule::TaskDefinition)
        .map(|definition| lower_task(definition, tokens, options))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(tasks = tasks.len(), tokens = tokens.len(), "lowered program");
    Ok(Program { tasks })
}

/// Lower one `task_definition` node.
pub fn lower_task(
    definition: &SyntaxNode,
    tokens: Tokens<'_>,
    options: &LoweringOptions,
) -> Result<Task> {
    let header = read_endless_words(definition.child_node(Rule::EndlessWords), tokens);
    let body = match definition.child_node(Rule::Task) {
        Some(task) => lower_body(task, tokens, options).map_err(|err| err.for_task(&header))?,
        None => TaskBody::Unrecognized,
    };

    if matches!(body, TaskBody::Unrecognized) {
        tracing::warn!(header = %header, "task body matches no known exercise kind");
    } else {
        tracing::debug!(header = %header, kind = body.kind_name(), "lowered task");
    }
    Ok(Task { header, body })
}

fn lower_body(
    task: &SyntaxNode,
    tokens: Tokens<'_>,
    options: &LoweringOptions,
) -> ReadResult<TaskBody> {
    let keyword = task
        .child_tokens(tokens)
        .map(|token| token.kind)
        .find(|kind| is_task_keyword(*kind));

    let body = match keyword {
        Some(TokenKind::RightOrFalse) => TaskBody::RoF(
            task.child_nodes(Rule::TrueFalseTask)
                .map(|line| true_false_line(line, tokens))
                .collect(),
        ),
        Some(TokenKind::Sorting) => TaskBody::Sorting(
            task.child_nodes(Rule::SortingTask)
                .map(|line| sorting_line(line, tokens))
                .collect::<ReadResult<_>>()?,
        ),
        Some(TokenKind::Matching) => TaskBody::Matching(
            task.child_nodes(Rule::MatchingTask)
                .map(|line| matching_line(line, tokens))
                .collect::<ReadResult<_>>()?,
        ),
        Some(TokenKind::Marking) => {
            TaskBody::Marking(annotated::<Marking>(task, tokens, options)?)
        }
        Some(TokenKind::ClozeText) => TaskBody::Cloze(annotated::<Cloze>(task, tokens, options)?),
        Some(TokenKind::CorrectionText) => {
            TaskBody::Correction(annotated::<Correction>(task, tokens, options)?)
        }
        Some(TokenKind::ChoiceText) => TaskBody::Choice(
            task.child_nodes(Rule::ChoiceTask)
                .map(|line| choice_line(line, tokens))
                .collect::<ReadResult<_>>()?,
        ),
        _ => TaskBody::Unrecognized,
    };
    Ok(body)
}

fn is_task_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RightOrFalse
            | TokenKind::Sorting
            | TokenKind::Matching
            | TokenKind::Marking
            | TokenKind::ClozeText
            | TokenKind::CorrectionText
            | TokenKind::ChoiceText
    )
}

/// `None` when the keyword is present but the per-kind body node is not.
fn annotated<K: Annotated>(
    task: &SyntaxNode,
    tokens: Tokens<'_>,
    options: &LoweringOptions,
) -> ReadResult<Option<AnnotatedTaskIr<K::Payload>>> {
    task.child_node(K::TASK)
        .map(|node| read_annotated_task::<K>(node, tokens, options.sentence_order))
        .transpose()
}

/// `true_false_task: question_or_statement true_false_answer`
fn true_false_line(line: &SyntaxNode, tokens: Tokens<'_>) -> TrueFalseLine {
    let answer = match line.child_node(Rule::TrueFalseAnswer) {
        Some(answer) if answer.has_token(tokens, TokenKind::AnswerTrue) => Answer::correct(),
        Some(answer) => Answer::incorrect(answer.child_node(Rule::Reason).and_then(|reason| {
            match reason.child_node(Rule::Sentence) {
                Some(sentence) => Some(read_sentence(sentence, tokens)),
                // error-tolerant branch: a bare run without an end mark
                None => read_bare_sentence(reason, tokens),
            }
        })),
        None => Answer::incorrect(None),
    };
    TrueFalseLine {
        question: read_question(line, tokens),
        answer,
    }
}

fn sorting_line(line: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<SortingLine> {
    Ok(SortingLine {
        question: read_question(line, tokens),
        points: read_task_points(line, tokens)?,
        items: line
            .child_nodes(Rule::Item)
            .filter_map(|item| item.child_node(Rule::Word))
            .map(|word| read_word(Some(word), tokens))
            .collect(),
    })
}

fn matching_line(line: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<MatchingLine> {
    let question = line
        .child_node(Rule::MatchingQuestionOrStatement)
        .map(|q| matching_question(q, tokens))
        .unwrap_or_default();

    let pairs = line
        .child_nodes(Rule::MatchingItem)
        .map(|item| {
            let mut words = item.child_nodes(Rule::Word);
            MatchingPair {
                left: read_word(words.next(), tokens),
                right: read_word(words.next(), tokens),
            }
        })
        .collect();

    Ok(MatchingLine {
        question,
        points: read_task_points(line, tokens)?,
        pairs,
    })
}

/// `endless_words '(' word ')' endless_words '(' word ')' PUNCTUATION`
fn matching_question(node: &SyntaxNode, tokens: Tokens<'_>) -> MatchingQuestion {
    let mut runs = node.child_nodes(Rule::EndlessWords);
    let mut words = node.child_nodes(Rule::Word);
    MatchingQuestion {
        prefix: read_endless_words(runs.next(), tokens),
        slot_a: read_word(words.next(), tokens),
        middle: read_endless_words(runs.next(), tokens),
        slot_b: read_word(words.next(), tokens),
        punctuation: read_punctuation(node, tokens),
    }
}

/// Correct choices each carry a positive value. False choices pair their text
/// runs with the optional negative literals by position; runs without a literal
/// are worth 0.
fn choice_line(line: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<ChoiceLine> {
    let mut options = line
        .child_nodes(Rule::CorrectChoice)
        .map(|choice| {
            Ok(ChoiceOption {
                text: read_endless_words(choice.child_node(Rule::EndlessWords), tokens),
                points: read_required_points(choice, tokens)?,
                is_correct: true,
            })
        })
        .collect::<ReadResult<Vec<_>>>()?;

    if let Some(false_choices) = line.child_node(Rule::FalseChoices) {
        let mut literals = false_choices.child_nodes(Rule::NegativeTaskPoint);
        for text in false_choices.child_nodes(Rule::EndlessWords) {
            let points = match literals.next() {
                Some(literal) => read_point_literal(literal, tokens)?,
                None => 0,
            };
            options.push(ChoiceOption {
                text: read_endless_words(Some(text), tokens),
                points,
                is_correct: false,
            });
        }
    }

    Ok(ChoiceLine {
        question: read_question(line, tokens),
        options,
    })
}
