use crate::common::{end_task, planets_choice, points, question, task, true_false, word, words};
use aufgaben_core::cst::{CstBuilder, Rule, TokenKind};
use aufgaben_core::domain::Task;
use aufgaben_core::formats::json::to_slim_json;
use aufgaben_core::ir::nodes::{ChoiceOption, ScoringMode};
use aufgaben_core::{compile, LoweringOptions};

#[test]
fn choice_options_follow_the_line() {
    let program = compile(&planets_choice(), &LoweringOptions::default()).unwrap();
    let Task::Choice(choice) = &program.tasks[0] else {
        panic!("expected a choice task");
    };
    let option = |text: &str, points, is_correct| ChoiceOption {
        text: text.to_string(),
        points,
        is_correct,
    };
    assert_eq!(
        choice.lines[0].options,
        vec![
            option("Mars", 3, true),
            option("Venus", 2, true),
            option("Mond", 0, false),
        ]
    );
    assert_eq!(choice.lines[0].question.text, "Welche sind Planeten");
}

#[test]
fn false_choices_pair_with_negative_literals_by_position() {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Farben", TokenKind::ChoiceText, "Auswahl");
    b.start_node(Rule::ChoiceTask);
    question(&mut b, "Welche Farbe hat der Himmel", "?");
    b.start_node(Rule::CorrectChoice);
    words(&mut b, "blau");
    points(&mut b, "1");
    b.finish_node();
    b.start_node(Rule::FalseChoices);
    words(&mut b, "grün");
    b.start_node(Rule::NegativeTaskPoint)
        .token(TokenKind::Dash, "-")
        .token(TokenKind::Number, "2")
        .finish_node();
    words(&mut b, "rot");
    b.finish_node().finish_node();
    end_task(&mut b);

    let program = compile(&b.finish(), &LoweringOptions::default()).unwrap();
    let Task::Choice(choice) = &program.tasks[0] else {
        panic!("expected a choice task");
    };
    let points: Vec<i32> = choice.lines[0].options.iter().map(|o| o.points).collect();
    assert_eq!(points, vec![1, -2, 0]);
}

#[test]
fn scoring_mode_and_total_come_together() {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    task(&mut b, "Reihenfolge", TokenKind::Sorting, "Umordnung");
    for literal in [Some("4"), None] {
        b.start_node(Rule::SortingTask);
        question(&mut b, "Ordne die Zahlen", ".");
        if let Some(literal) = literal {
            points(&mut b, literal);
        }
        for item in ["3", "1", "2"] {
            b.start_node(Rule::Item);
            word(&mut b, item);
            b.finish_node();
        }
        b.finish_node();
    }
    end_task(&mut b);
    task(&mut b, "Hauptstädte", TokenKind::Matching, "Zuordnung");
    b.start_node(Rule::MatchingTask);
    b.start_node(Rule::MatchingQuestionOrStatement);
    words(&mut b, "Ordne");
    b.token(TokenKind::OpenParen, "(");
    word(&mut b, "Land");
    b.token(TokenKind::CloseParen, ")");
    words(&mut b, "zu");
    b.token(TokenKind::OpenParen, "(");
    word(&mut b, "Stadt");
    b.token(TokenKind::CloseParen, ")")
        .token(TokenKind::Punctuation, ".")
        .finish_node();
    points(&mut b, "2");
    b.start_node(Rule::MatchingItem);
    word(&mut b, "Spanien");
    b.token(TokenKind::Dash, "-");
    word(&mut b, "Madrid");
    b.finish_node().finish_node();
    end_task(&mut b);

    let program = compile(&b.finish(), &LoweringOptions::default()).unwrap();
    let mut seen = Vec::new();
    for task in &program.tasks {
        match task {
            Task::Sorting(sorting) => seen.extend(sorting.lines.iter().map(|l| l.points)),
            Task::Matching(matching) => seen.extend(matching.lines.iter().map(|l| l.points)),
            other => panic!("unexpected task {}", other.kind_name()),
        }
    }
    assert_eq!(seen.len(), 3);
    for points in seen {
        assert_eq!(
            points.scoring_mode() == ScoringMode::AllOrNothing,
            points.total_if_all_correct().is_some()
        );
    }

    let json: serde_json::Value = serde_json::from_str(&to_slim_json(&program).unwrap()).unwrap();
    assert_eq!(
        json["tasks"][0]["lines"][0]["points"],
        serde_json::json!({"scoringMode": "AllOrNothing", "totalIfAllCorrect": 4})
    );
    assert_eq!(
        json["tasks"][0]["lines"][1]["points"],
        serde_json::json!({"scoringMode": "PartialPerCorrect"})
    );
    assert_eq!(
        json["tasks"][1]["lines"][0]["pairs"][0],
        serde_json::json!({"left": "Spanien", "right": "Madrid"})
    );
}

#[test]
fn true_answers_never_carry_a_reason() {
    let mut b = CstBuilder::new();
    b.start_node(Rule::Program);
    true_false(&mut b, "Wahr", "Wasser ist nass", true);
    true_false(&mut b, "Falsch", "Feuer ist kalt", false);
    let program = compile(&b.finish(), &LoweringOptions::default()).unwrap();

    let json = to_slim_json(&program).unwrap();
    assert!(json.contains(r#""answer":{"isTrue":true}"#));
    assert!(json.contains(r#""answer":{"isTrue":false}"#));
    assert!(!json.contains("reason"));
    assert!(!json.contains("null"));
}
