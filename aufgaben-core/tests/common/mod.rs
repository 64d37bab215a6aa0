//! Fixture trees shaped the way the grammar front end emits them.

use aufgaben_core::cst::{CstBuilder, ParsedSource, Rule, TokenKind};

pub fn words(b: &mut CstBuilder, text: &str) {
    b.start_node(Rule::EndlessWords).words(text).finish_node();
}

pub fn word(b: &mut CstBuilder, text: &str) {
    b.start_node(Rule::Word).words(text).finish_node();
}

pub fn points(b: &mut CstBuilder, literal: &str) {
    b.start_node(Rule::PositiveTaskPoint)
        .words(literal)
        .finish_node();
}

pub fn question(b: &mut CstBuilder, text: &str, mark: &str) {
    b.start_node(Rule::QuestionOrStatement)
        .start_node(Rule::Sentence);
    words(b, text);
    b.token(TokenKind::Punctuation, mark)
        .finish_node()
        .finish_node();
}

/// Opens `task_definition` and `task`; close both with [`end_task`].
pub fn task(b: &mut CstBuilder, header: &str, keyword: TokenKind, text: &str) {
    b.start_node(Rule::TaskDefinition);
    words(b, header);
    b.start_node(Rule::Task)
        .token(keyword, text)
        .token(TokenKind::Colon, ":");
}

pub fn end_task(b: &mut CstBuilder) {
    b.finish_node().finish_node().newline();
}

pub fn true_false(b: &mut CstBuilder, header: &str, statement: &str, verdict: bool) {
    task(b, header, TokenKind::RightOrFalse, "RoF");
    b.start_node(Rule::TrueFalseTask);
    question(b, statement, ".");
    b.start_node(Rule::TrueFalseAnswer);
    if verdict {
        b.token(TokenKind::AnswerTrue, "wahr");
    } else {
        b.token(TokenKind::AnswerFalse, "falsch");
    }
    b.finish_node().finish_node();
    end_task(b);
}

/// `Quiz 1 RoF: Die Erde ist rund. wahr`
pub fn quiz_one() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    true_false(&mut b, "Quiz 1", "Die Erde ist rund", true);
    b.finish_node();
    b.finish()
}

pub fn cloze_word(b: &mut CstBuilder, solution: &str, literal: &str) {
    b.start_node(Rule::ClozeWord)
        .token(TokenKind::OpenParen, "(");
    word(b, solution);
    b.token(TokenKind::Connection, ",");
    points(b, literal);
    b.token(TokenKind::CloseParen, ")").finish_node();
}

/// `Hunde Lückentext: Fülle die Lücke. Der (Hund,2) bellt.`
pub fn dog_cloze() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Hunde", TokenKind::ClozeText, "Lückentext");
    b.start_node(Rule::ClozeTask);
    question(&mut b, "Fülle die Lücke", ".");
    b.start_node(Rule::ClozeText)
        .start_node(Rule::ClozeSentence);
    words(&mut b, "Der");
    cloze_word(&mut b, "Hund", "2");
    words(&mut b, "bellt");
    b.token(TokenKind::Punctuation, ".")
        .finish_node()
        .finish_node()
        .finish_node();
    end_task(&mut b);
    b.finish_node();
    b.finish()
}

/// Two correct options worth 3 and 2, one false option without a literal.
pub fn planets_choice() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Planeten", TokenKind::ChoiceText, "Auswahl");
    b.start_node(Rule::ChoiceTask);
    question(&mut b, "Welche sind Planeten", "?");
    for (text, literal) in [("Mars", "3"), ("Venus", "2")] {
        b.start_node(Rule::CorrectChoice);
        words(&mut b, text);
        points(&mut b, literal);
        b.finish_node();
    }
    b.start_node(Rule::FalseChoices);
    words(&mut b, "Mond");
    b.finish_node();
    b.finish_node();
    end_task(&mut b);
    b.finish_node();
    b.finish()
}

/// A well-formed task followed by one whose body matches no kind.
pub fn with_unknown_task() -> ParsedSource {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    true_false(&mut b, "Quiz 1", "Die Erde ist rund", true);
    task(&mut b, "Rätsel 7", TokenKind::Letters, "Kreuzworträtsel");
    end_task(&mut b);
    b.finish_node();
    b.finish()
}
