//! Core data structures for the Intermediate Representation (IR).
//!
//! Line records (sentences, points, answers, payloads) are shared with the
//! domain tree. Only the composite bodies differ: the IR keeps their parts loose
//! and their payload optional, the domain makes both explicit.

use serde::{Serialize, Serializer};

/// Sentence-ending mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Punctuation {
    #[default]
    Period,
    Exclamation,
    Question,
}

impl Punctuation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Punctuation::Period),
            '!' => Some(Punctuation::Exclamation),
            '?' => Some(Punctuation::Question),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Punctuation::Period => '.',
            Punctuation::Exclamation => '!',
            Punctuation::Question => '?',
        }
    }
}

impl Serialize for Punctuation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// A sentence without its trailing mark, plus the mark.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Sentence {
    pub text: String,
    pub punctuation: Punctuation,
}

impl Sentence {
    pub fn new(text: impl Into<String>, punctuation: Punctuation) -> Self {
        Self {
            text: text.into(),
            punctuation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoringMode {
    AllOrNothing,
    PartialPerCorrect,
}

/// Declared scoring of a sorting or matching line.
///
/// Fields are private so the two legal states are the only ones that exist:
/// all-or-nothing with a total, or partial credit without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPoints {
    scoring_mode: ScoringMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_if_all_correct: Option<i32>,
}

impl TaskPoints {
    pub fn all_or_nothing(total: i32) -> Self {
        Self {
            scoring_mode: ScoringMode::AllOrNothing,
            total_if_all_correct: Some(total),
        }
    }

    pub fn partial_per_correct() -> Self {
        Self {
            scoring_mode: ScoringMode::PartialPerCorrect,
            total_if_all_correct: None,
        }
    }

    pub fn from_total(total: Option<i32>) -> Self {
        match total {
            Some(total) => Self::all_or_nothing(total),
            None => Self::partial_per_correct(),
        }
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring_mode
    }

    pub fn total_if_all_correct(&self) -> Option<i32> {
        self.total_if_all_correct
    }
}

/// Verdict of a true/false line. A reason only exists for false statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    is_true: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<Sentence>,
}

impl Answer {
    pub fn correct() -> Self {
        Self {
            is_true: true,
            reason: None,
        }
    }

    pub fn incorrect(reason: Option<Sentence>) -> Self {
        Self {
            is_true: false,
            reason,
        }
    }

    pub fn is_true(&self) -> bool {
        self.is_true
    }

    pub fn reason(&self) -> Option<&Sentence> {
        self.reason.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrueFalseLine {
    pub question: Sentence,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortingLine {
    pub question: Sentence,
    pub points: TaskPoints,
    /// Presentation order, which is the shuffled order the learner restores.
    pub items: Vec<String>,
}

/// A sentence with two inline slot words: `prefix (slotA) middle (slotB).`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingQuestion {
    pub prefix: String,
    pub slot_a: String,
    pub middle: String,
    pub slot_b: String,
    pub punctuation: Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchingPair {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchingLine {
    pub question: MatchingQuestion,
    pub points: TaskPoints,
    pub pairs: Vec<MatchingPair>,
}

/// Cloze payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blank {
    pub solution: String,
    pub points: i32,
}

/// Marking payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedSpan {
    pub marked_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<String>,
    pub points: i32,
}

/// Correction payload: the wrong form shown on the page and its fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorrectionSpan {
    pub wrong: String,
    pub correct: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub text: String,
    pub points: i32,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceLine {
    pub question: Sentence,
    pub options: Vec<ChoiceOption>,
}

/// A loosely tagged piece of an annotated sentence.
///
/// Lowering fills exactly one of the two fields; the domain converter is the
/// place that turns this into a proper sum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrPart<P> {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<P>,
}

impl<P> IrPart<P> {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    pub fn annotation(annotation: P) -> Self {
        Self {
            text: String::new(),
            annotation: Some(annotation),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.annotation.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrSentence<P> {
    pub punctuation: Punctuation,
    pub parts: Vec<IrPart<P>>,
}

/// Body shared by the marking, cloze and correction kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedTaskIr<P> {
    pub question: Sentence,
    pub sentences: Vec<IrSentence<P>>,
}

/// Kind-specific payload of a task.
///
/// The composite kinds keep their body optional: a task whose keyword was
/// found but whose body node is absent lowers to `None` and is rejected by the
/// domain converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "body")]
pub enum TaskBody {
    #[serde(rename = "RoF")]
    RoF(Vec<TrueFalseLine>),
    #[serde(rename = "Umordnung")]
    Sorting(Vec<SortingLine>),
    #[serde(rename = "Zuordnung")]
    Matching(Vec<MatchingLine>),
    #[serde(rename = "Markierung")]
    Marking(Option<AnnotatedTaskIr<MarkedSpan>>),
    #[serde(rename = "Lueckentext")]
    Cloze(Option<AnnotatedTaskIr<Blank>>),
    #[serde(rename = "Textkorrektur")]
    Correction(Option<AnnotatedTaskIr<CorrectionSpan>>),
    #[serde(rename = "Auswahl")]
    Choice(Vec<ChoiceLine>),
    #[serde(rename = "Unknown")]
    Unrecognized,
}

impl TaskBody {
    /// Wire name of the exercise kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TaskBody::RoF(_) => "RoF",
            TaskBody::Sorting(_) => "Umordnung",
            TaskBody::Matching(_) => "Zuordnung",
            TaskBody::Marking(_) => "Markierung",
            TaskBody::Cloze(_) => "Lueckentext",
            TaskBody::Correction(_) => "Textkorrektur",
            TaskBody::Choice(_) => "Auswahl",
            TaskBody::Unrecognized => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub header: String,
    #[serde(flatten)]
    pub body: TaskBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub tasks: Vec<Task>,
}
