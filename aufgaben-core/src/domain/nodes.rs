//! The strictly typed domain tree.

use crate::ir::nodes::{
    Blank, ChoiceLine, CorrectionSpan, MarkedSpan, MatchingLine, Punctuation, Sentence,
    SortingLine, TrueFalseLine,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Payload of an annotation inside a sentence.
pub trait Annotation: Serialize {
    /// Key the payload is emitted under in its part object.
    const KEY: &'static str;

    /// What the learner sees on the page where the annotation sits.
    fn visible_text(&self) -> &str;
}

impl Annotation for Blank {
    const KEY: &'static str = "blank";

    fn visible_text(&self) -> &str {
        &self.solution
    }
}

impl Annotation for MarkedSpan {
    const KEY: &'static str = "mark";

    fn visible_text(&self) -> &str {
        &self.marked_text
    }
}

impl Annotation for CorrectionSpan {
    const KEY: &'static str = "correction";

    fn visible_text(&self) -> &str {
        &self.wrong
    }
}

/// One piece of an annotated sentence.
///
/// Serialized as a single-key object: `{"text": ...}` for plain text,
/// `{<P::KEY>: {...}}` for an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part<P> {
    PlainText(String),
    Annotation(P),
}

impl<P: Annotation> Part<P> {
    pub fn visible_text(&self) -> &str {
        match self {
            Part::PlainText(text) => text,
            Part::Annotation(payload) => payload.visible_text(),
        }
    }
}

impl<P: Annotation> Serialize for Part<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Part::PlainText(text) => map.serialize_entry("text", text)?,
            Part::Annotation(payload) => map.serialize_entry(P::KEY, payload)?,
        }
        map.end()
    }
}

/// Sentence shape shared by marking, cloze and correction bodies.
///
/// Plain parts never follow each other directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "P: Annotation")]
pub struct AnnotatedSentence<P> {
    pub punctuation: Punctuation,
    pub parts: Vec<Part<P>>,
}

impl<P: Annotation> AnnotatedSentence<P> {
    /// The sentence as read on the page: parts joined by single spaces, then
    /// the end mark.
    pub fn visible_text(&self) -> String {
        let mut out = self
            .parts
            .iter()
            .map(Part::visible_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        out.push(self.punctuation.as_char());
        out
    }

    pub fn annotations(&self) -> impl Iterator<Item = &P> + '_ {
        self.parts.iter().filter_map(|part| match part {
            Part::Annotation(payload) => Some(payload),
            Part::PlainText(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "P: Annotation")]
pub struct AnnotatedTask<P> {
    pub question: Sentence,
    pub sentences: Vec<AnnotatedSentence<P>>,
}

/// Task of a line-based kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinesTask<L> {
    pub header: String,
    pub lines: Vec<L>,
}

/// Task of an interleaved kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "P: Annotation")]
pub struct CompositeTask<P> {
    pub header: String,
    pub task: AnnotatedTask<P>,
}

/// One exercise, discriminated by kind. The `type` names are the fixed
/// vocabulary downstream consumers match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Task {
    #[serde(rename = "RoF")]
    RoF(LinesTask<TrueFalseLine>),
    #[serde(rename = "Umordnung")]
    Sorting(LinesTask<SortingLine>),
    #[serde(rename = "Zuordnung")]
    Matching(LinesTask<MatchingLine>),
    #[serde(rename = "Markierung")]
    Marking(CompositeTask<MarkedSpan>),
    #[serde(rename = "Lueckentext")]
    Cloze(CompositeTask<Blank>),
    #[serde(rename = "Textkorrektur")]
    Correction(CompositeTask<CorrectionSpan>),
    #[serde(rename = "Auswahl")]
    Choice(LinesTask<ChoiceLine>),
}

impl Task {
    pub fn header(&self) -> &str {
        match self {
            Task::RoF(t) => &t.header,
            Task::Sorting(t) => &t.header,
            Task::Matching(t) => &t.header,
            Task::Marking(t) => &t.header,
            Task::Cloze(t) => &t.header,
            Task::Correction(t) => &t.header,
            Task::Choice(t) => &t.header,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Task::RoF(_) => "RoF",
            Task::Sorting(_) => "Umordnung",
            Task::Matching(_) => "Zuordnung",
            Task::Marking(_) => "Markierung",
            Task::Cloze(_) => "Lueckentext",
            Task::Correction(_) => "Textkorrektur",
            Task::Choice(_) => "Auswahl",
        }
    }
}

/// Root of the domain tree: `{"type":"Program","tasks":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub tasks: Vec<Task>,
}
