//! Segment decomposition for the interleaved task kinds.
//!
//!     Marking, cloze and correction bodies share one sentence shape:
//!
//!         annotated_sentence: endless_words? (annotation endless_words?)+ PUNCTUATION
//!         body:               ((sentence | annotated_sentence)+ NEWLINE?)*
//!
//!     and differ only in the annotation rule and its payload. [`Annotated`]
//!     names those differences per kind; everything else here is shared.
//!
//!     A sentence is decomposed by walking its children in document order. Every
//!     annotation becomes one annotation part, every text run one plain part, so a
//!     sentence with N annotations yields between N and 2N + 1 parts.

use super::nodes::{AnnotatedTaskIr, Blank, CorrectionSpan, IrPart, IrSentence, MarkedSpan};
use super::text::{
    read_endless_words, read_punctuation, read_question, read_required_points, read_word,
    ReadResult,
};
use crate::cst::{Rule, SyntaxElement, SyntaxNode, Tokens};
use serde::{Deserialize, Serialize};

/// How plain and annotated sentences of one body are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceOrder {
    /// All annotated sentences first, then all plain sentences.
    ///
    /// This is NOT document order. Existing consumers of the output rely on
    /// this grouping, so it stays the default until they are migrated.
    #[default]
    Grouped,
    /// Document order across both groups.
    Source,
}

/// Kind-specific parts of an interleaved task.
pub trait Annotated {
    type Payload;

    /// The per-kind task rule (`marking_task`, ...), found under `task`.
    const TASK: Rule;
    /// The body rule (`marking_text`, ...).
    const BODY: Rule;
    /// The annotated sentence rule (`marked_sentence`, ...).
    const SENTENCE: Rule;
    /// The annotation rule (`marked_word`, ...).
    const ANNOTATION: Rule;

    fn read_annotation(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<Self::Payload>;
}

pub struct Marking;
pub struct Cloze;
pub struct Correction;

impl Annotated for Marking {
    type Payload = MarkedSpan;
    const TASK: Rule = Rule::MarkingTask;
    const BODY: Rule = Rule::MarkingText;
    const SENTENCE: Rule = Rule::MarkedSentence;
    const ANNOTATION: Rule = Rule::MarkedWord;

    /// `'(' endless_words ')' ('[' endless_words ',' points ']' | '[' points ']')`
    fn read_annotation(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<MarkedSpan> {
        let marked_text = read_endless_words(node.child_node(Rule::EndlessWords), tokens);
        let point = node.child_node(Rule::MarkedWordPoint);
        let correction = point
            .and_then(|p| p.child_node(Rule::EndlessWords))
            .map(|words| read_endless_words(Some(words), tokens));
        Ok(MarkedSpan {
            marked_text,
            correction,
            points: read_required_points(point.unwrap_or(node), tokens)?,
        })
    }
}

impl Annotated for Cloze {
    type Payload = Blank;
    const TASK: Rule = Rule::ClozeTask;
    const BODY: Rule = Rule::ClozeText;
    const SENTENCE: Rule = Rule::ClozeSentence;
    const ANNOTATION: Rule = Rule::ClozeWord;

    /// `'(' word ',' points ')'`
    fn read_annotation(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<Blank> {
        Ok(Blank {
            solution: read_word(node.child_node(Rule::Word), tokens),
            points: read_required_points(node, tokens)?,
        })
    }
}

impl Annotated for Correction {
    type Payload = CorrectionSpan;
    const TASK: Rule = Rule::CorrectionTask;
    const BODY: Rule = Rule::CorrectionText;
    const SENTENCE: Rule = Rule::CorrectionSentence;
    const ANNOTATION: Rule = Rule::CorrectionWord;

    /// `'(' word ')' '[' word ',' points ']'`
    fn read_annotation(node: &SyntaxNode, tokens: Tokens<'_>) -> ReadResult<CorrectionSpan> {
        let mut words = node.child_nodes(Rule::Word);
        let wrong = read_word(words.next(), tokens);
        let correct = read_word(words.next(), tokens);
        Ok(CorrectionSpan {
            wrong,
            correct,
            points: read_required_points(node, tokens)?,
        })
    }
}

/// Split one annotated sentence into its ordered parts.
pub fn decompose<K: Annotated>(
    sentence: &SyntaxNode,
    tokens: Tokens<'_>,
) -> ReadResult<IrSentence<K::Payload>> {
    let mut parts: Vec<IrPart<K::Payload>> = Vec::new();

    for child in &sentence.children {
        let SyntaxElement::Node(node) = child else {
            continue;
        };
        if node.rule == Rule::EndlessWords {
            push_plain(&mut parts, read_endless_words(Some(node), tokens));
        } else if node.rule == K::ANNOTATION {
            parts.push(IrPart::annotation(K::read_annotation(node, tokens)?));
        }
    }

    Ok(IrSentence {
        punctuation: read_punctuation(sentence, tokens),
        parts,
    })
}

/// A sentence without annotations: one part holding all of its text.
pub fn plain_sentence<P>(sentence: &SyntaxNode, tokens: Tokens<'_>) -> IrSentence<P> {
    IrSentence {
        punctuation: read_punctuation(sentence, tokens),
        parts: vec![IrPart::text(read_endless_words(
            sentence.child_node(Rule::EndlessWords),
            tokens,
        ))],
    }
}

/// All sentences of a body node, ordered according to `order`.
pub fn read_body<K: Annotated>(
    body: &SyntaxNode,
    tokens: Tokens<'_>,
    order: SentenceOrder,
) -> ReadResult<Vec<IrSentence<K::Payload>>> {
    // with `Source` ordering everything lands in `first`
    let mut first = Vec::new();
    let mut plain = Vec::new();

    for child in &body.children {
        let SyntaxElement::Node(node) = child else {
            continue;
        };
        if node.rule == K::SENTENCE {
            first.push(decompose::<K>(node, tokens)?);
        } else if node.rule == Rule::Sentence {
            let sentence = plain_sentence(node, tokens);
            match order {
                SentenceOrder::Grouped => plain.push(sentence),
                SentenceOrder::Source => first.push(sentence),
            }
        }
    }

    first.append(&mut plain);
    Ok(first)
}

/// Question plus body of an interleaved task node (`marking_task`, ...).
pub fn read_annotated_task<K: Annotated>(
    task: &SyntaxNode,
    tokens: Tokens<'_>,
    order: SentenceOrder,
) -> ReadResult<AnnotatedTaskIr<K::Payload>> {
    let sentences = match task.child_node(K::BODY) {
        Some(body) => read_body::<K>(body, tokens, order)?,
        None => Vec::new(),
    };
    Ok(AnnotatedTaskIr {
        question: read_question(task, tokens),
        sentences,
    })
}

/// The grammar never puts two text runs next to each other; if a tree does,
/// they are merged so plain parts keep alternating with annotations.
fn push_plain<P>(parts: &mut Vec<IrPart<P>>, text: String) {
    match parts.last_mut() {
        Some(last) if last.is_plain() => {
            if !last.text.is_empty() && !text.is_empty() {
                last.text.push(' ');
            }
            last.text.push_str(&text);
        }
        _ => parts.push(IrPart::text(text)),
    }
}
