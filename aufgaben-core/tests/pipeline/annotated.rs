use crate::common::{cloze_word, dog_cloze, end_task, points, question, task, word, words};
use aufgaben_core::cst::{CstBuilder, ParsedSource, Rule, TokenKind};
use aufgaben_core::domain::{Part, Task};
use aufgaben_core::formats::json::to_slim_json;
use aufgaben_core::ir::nodes::{Blank, Punctuation};
use aufgaben_core::{compile, LoweringOptions, SentenceOrder};
use proptest::prelude::*;

#[test]
fn dog_cloze_decomposes_around_the_blank() {
    let program = compile(&dog_cloze(), &LoweringOptions::default()).unwrap();
    let Task::Cloze(cloze) = &program.tasks[0] else {
        panic!("expected a cloze task");
    };
    let sentence = &cloze.task.sentences[0];
    assert_eq!(sentence.punctuation, Punctuation::Period);
    assert_eq!(
        sentence.parts,
        vec![
            Part::PlainText("Der".into()),
            Part::Annotation(Blank {
                solution: "Hund".into(),
                points: 2
            }),
            Part::PlainText("bellt".into()),
        ]
    );
    assert_eq!(sentence.visible_text(), "Der Hund bellt.");
}

#[test]
fn dog_cloze_json() {
    let program = compile(&dog_cloze(), &LoweringOptions::default()).unwrap();
    assert_eq!(
        to_slim_json(&program).unwrap(),
        r#"{"type":"Program","tasks":[{"type":"Lueckentext","header":"Hunde","task":{"question":{"text":"Fülle die Lücke","punctuation":"."},"sentences":[{"punctuation":".","parts":[{"text":"Der"},{"blank":{"solution":"Hund","points":2}},{"text":"bellt"}]}]}}]}"#
    );
}

#[test]
fn leading_blank_has_no_text_key() {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Lücke", TokenKind::ClozeText, "Lückentext");
    b.start_node(Rule::ClozeTask);
    question(&mut b, "Ergänze", ".");
    b.start_node(Rule::ClozeText).start_node(Rule::ClozeSentence);
    cloze_word(&mut b, "Katzen", "1");
    words(&mut b, "schnurren");
    b.token(TokenKind::Punctuation, ".")
        .finish_node()
        .finish_node()
        .finish_node();
    end_task(&mut b);
    let program = compile(&b.finish(), &LoweringOptions::default()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&to_slim_json(&program).unwrap()).unwrap();
    let first = &json["tasks"][0]["task"]["sentences"][0]["parts"][0];
    assert!(first.get("text").is_none());
    assert_eq!(first["blank"]["solution"], "Katzen");
}

fn marking_source() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Fehler finden", TokenKind::Marking, "Markierung");
    b.start_node(Rule::MarkingTask);
    question(&mut b, "Markiere die Fehler", ".");
    b.start_node(Rule::MarkingText);
    b.start_node(Rule::Sentence);
    words(&mut b, "Ohne Fehler");
    b.token(TokenKind::Punctuation, ".").finish_node();
    b.start_node(Rule::MarkedSentence);
    words(&mut b, "Das");
    b.start_node(Rule::MarkedWord).token(TokenKind::OpenParen, "(");
    words(&mut b, "Haus");
    b.token(TokenKind::CloseParen, ")");
    b.start_node(Rule::MarkedWordPoint)
        .token(TokenKind::OpenBracket, "[");
    points(&mut b, "2");
    b.token(TokenKind::CloseBracket, "]").finish_node();
    b.finish_node();
    words(&mut b, "ist groß");
    b.token(TokenKind::Punctuation, ".").finish_node();
    b.finish_node().finish_node();
    end_task(&mut b);
    b.finish()
}

#[test]
fn grouped_order_moves_plain_sentences_last() {
    let program = compile(&marking_source(), &LoweringOptions::default()).unwrap();
    let Task::Marking(marking) = &program.tasks[0] else {
        panic!("expected a marking task");
    };
    let texts: Vec<String> = marking
        .task
        .sentences
        .iter()
        .map(|s| s.visible_text())
        .collect();
    assert_eq!(texts, vec!["Das Haus ist groß.", "Ohne Fehler."]);
    let mark = marking.task.sentences[0].annotations().next().unwrap();
    assert_eq!(mark.marked_text, "Haus");
    assert_eq!(mark.correction, None);
}

#[test]
fn source_order_keeps_document_order() {
    let options = LoweringOptions {
        sentence_order: SentenceOrder::Source,
    };
    let program = compile(&marking_source(), &options).unwrap();
    let Task::Marking(marking) = &program.tasks[0] else {
        panic!("expected a marking task");
    };
    assert_eq!(marking.task.sentences[0].visible_text(), "Ohne Fehler.");
}

fn correction_source() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Korrektur", TokenKind::CorrectionText, "Textkorrektur");
    b.start_node(Rule::CorrectionTask);
    question(&mut b, "Korrigiere", ".");
    b.start_node(Rule::CorrectionText)
        .start_node(Rule::CorrectionSentence);
    words(&mut b, "Wir");
    b.start_node(Rule::CorrectionWord)
        .token(TokenKind::OpenParen, "(");
    word(&mut b, "gehst");
    b.token(TokenKind::CloseParen, ")")
        .token(TokenKind::OpenBracket, "[");
    word(&mut b, "gehen");
    b.token(TokenKind::Connection, ",");
    points(&mut b, "1");
    b.token(TokenKind::CloseBracket, "]").finish_node();
    b.token(TokenKind::Punctuation, ".")
        .finish_node()
        .finish_node()
        .finish_node();
    end_task(&mut b);
    b.finish()
}

#[test]
fn correction_shows_the_wrong_form() {
    let program = compile(&correction_source(), &LoweringOptions::default()).unwrap();
    let Task::Correction(correction) = &program.tasks[0] else {
        panic!("expected a correction task");
    };
    let sentence = &correction.task.sentences[0];
    assert_eq!(sentence.visible_text(), "Wir gehst.");
    let span = sentence.annotations().next().unwrap();
    assert_eq!((span.wrong.as_str(), span.correct.as_str()), ("gehst", "gehen"));
}

#[test]
fn correction_json() {
    let program = compile(&correction_source(), &LoweringOptions::default()).unwrap();
    assert_eq!(
        to_slim_json(&program).unwrap(),
        r#"{"type":"Program","tasks":[{"type":"Textkorrektur","header":"Korrektur","task":{"question":{"text":"Korrigiere","punctuation":"."},"sentences":[{"punctuation":".","parts":[{"text":"Wir"},{"correction":{"wrong":"gehst","correct":"gehen","points":1}}]}]}}]}"#
    );
}

#[test]
fn mark_with_correction_json() {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Rechtschreibung", TokenKind::Marking, "Markierung");
    b.start_node(Rule::MarkingTask);
    question(&mut b, "Markiere", ".");
    b.start_node(Rule::MarkingText).start_node(Rule::MarkedSentence);
    words(&mut b, "Das");
    b.start_node(Rule::MarkedWord).token(TokenKind::OpenParen, "(");
    words(&mut b, "Hauß");
    b.token(TokenKind::CloseParen, ")");
    b.start_node(Rule::MarkedWordPoint)
        .token(TokenKind::OpenBracket, "[");
    words(&mut b, "Haus");
    b.token(TokenKind::Connection, ",");
    points(&mut b, "2");
    b.token(TokenKind::CloseBracket, "]").finish_node();
    b.finish_node();
    words(&mut b, "ist alt");
    b.token(TokenKind::Punctuation, ".")
        .finish_node()
        .finish_node()
        .finish_node();
    end_task(&mut b);
    let program = compile(&b.finish(), &LoweringOptions::default()).unwrap();

    assert_eq!(
        to_slim_json(&program).unwrap(),
        r#"{"type":"Program","tasks":[{"type":"Markierung","header":"Rechtschreibung","task":{"question":{"text":"Markiere","punctuation":"."},"sentences":[{"punctuation":".","parts":[{"text":"Das"},{"mark":{"markedText":"Hauß","correction":"Haus","points":2}},{"text":"ist alt"}]}]}}]}"#
    );
}

/// One cloze sentence: optional leading text, then blanks each optionally
/// followed by text.
fn cloze_sentence_source(lead: bool, trailing: &[bool]) -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Zufall", TokenKind::ClozeText, "Lückentext");
    b.start_node(Rule::ClozeTask);
    question(&mut b, "Fülle", ".");
    b.start_node(Rule::ClozeText).start_node(Rule::ClozeSentence);
    if lead {
        words(&mut b, "am Anfang");
    }
    for (i, text_after) in trailing.iter().enumerate() {
        cloze_word(&mut b, &format!("w{i}"), &(i + 1).to_string());
        if *text_after {
            words(&mut b, "dazwischen");
        }
    }
    b.token(TokenKind::Punctuation, ".")
        .finish_node()
        .finish_node()
        .finish_node();
    end_task(&mut b);
    b.finish()
}

proptest! {
    #[test]
    fn part_count_stays_within_bounds(
        lead in any::<bool>(),
        trailing in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let source = cloze_sentence_source(lead, &trailing);
        let program = compile(&source, &LoweringOptions::default()).unwrap();
        let Task::Cloze(cloze) = &program.tasks[0] else {
            panic!("expected a cloze task");
        };
        let parts = &cloze.task.sentences[0].parts;
        let n = trailing.len();
        prop_assert!(parts.len() >= n && parts.len() <= 2 * n + 1);

        let solutions: Vec<&str> = cloze.task.sentences[0]
            .annotations()
            .map(|blank| blank.solution.as_str())
            .collect();
        let expected: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        prop_assert_eq!(solutions, expected.iter().map(String::as_str).collect::<Vec<_>>());

        // plain parts never sit next to each other
        for pair in parts.windows(2) {
            prop_assert!(!matches!(pair, [Part::PlainText(_), Part::PlainText(_)]));
        }
    }
}
