//! Conversion from the IR into the domain tree.
//!
//! The conversion is an exhaustive match over [`TaskBody`]. Line-based kinds are
//! moved over as they are. The composite kinds must carry their body
//! ([`Error::MissingPayload`] otherwise), and their loose parts are turned into
//! [`Part`] values. An unrecognized body fails with [`Error::UnknownTaskType`].
//! The first failing task aborts the whole conversion.

use super::nodes::{
    AnnotatedSentence, AnnotatedTask, Annotation, CompositeTask, LinesTask, Part, Program, Task,
};
use crate::error::{Error, Result};
use crate::ir::nodes::{self as ir, AnnotatedTaskIr, IrSentence, TaskBody};

pub fn convert_program(program: ir::Program) -> Result<Program> {
    let tasks = program
        .tasks
        .into_iter()
        .map(convert_task)
        .collect::<Result<Vec<_>>>()?;
    tracing::info!(tasks = tasks.len(), "converted program to domain tree");
    Ok(Program { tasks })
}

pub fn convert_task(task: ir::Task) -> Result<Task> {
    let ir::Task { header, body } = task;
    let kind = body.kind_name();

    let task = match body {
        TaskBody::RoF(lines) => Task::RoF(LinesTask { header, lines }),
        TaskBody::Sorting(lines) => Task::Sorting(LinesTask { header, lines }),
        TaskBody::Matching(lines) => Task::Matching(LinesTask { header, lines }),
        TaskBody::Choice(lines) => Task::Choice(LinesTask { header, lines }),
        TaskBody::Marking(body) => Task::Marking(composite(header, kind, body)?),
        TaskBody::Cloze(body) => Task::Cloze(composite(header, kind, body)?),
        TaskBody::Correction(body) => Task::Correction(composite(header, kind, body)?),
        TaskBody::Unrecognized => return Err(Error::UnknownTaskType { header }),
    };
    Ok(task)
}

fn composite<P: Annotation>(
    header: String,
    kind: &'static str,
    body: Option<AnnotatedTaskIr<P>>,
) -> Result<CompositeTask<P>> {
    let Some(body) = body else {
        return Err(Error::MissingPayload { kind, header });
    };
    Ok(CompositeTask {
        header,
        task: AnnotatedTask {
            question: body.question,
            sentences: body.sentences.into_iter().map(convert_sentence).collect(),
        },
    })
}

/// A part holding both text and an annotation becomes text then annotation; a
/// part holding neither is dropped. Adjacent text is merged.
fn convert_sentence<P>(sentence: IrSentence<P>) -> AnnotatedSentence<P> {
    let mut parts: Vec<Part<P>> = Vec::with_capacity(sentence.parts.len());
    for part in sentence.parts {
        if !part.text.is_empty() {
            match parts.last_mut() {
                Some(Part::PlainText(last)) => {
                    last.push(' ');
                    last.push_str(&part.text);
                }
                _ => parts.push(Part::PlainText(part.text)),
            }
        }
        if let Some(annotation) = part.annotation {
            parts.push(Part::Annotation(annotation));
        }
    }
    AnnotatedSentence {
        punctuation: sentence.punctuation,
        parts,
    }
}
