use crate::common::{dog_cloze, quiz_one};
use aufgaben_core::cst::ParsedSource;
use aufgaben_core::formats::json::{to_slim_json, JsonRules};
use aufgaben_core::publish::{publish, PublishArtifact, PublishSpec};
use aufgaben_core::{compile, FormatRegistry, LoweringOptions};
use insta::assert_snapshot;
use std::fs;

#[test]
fn single_true_false_task_compact() {
    let program = compile(&quiz_one(), &LoweringOptions::default()).unwrap();
    let json = FormatRegistry::default()
        .serialize(&program, "json-compact")
        .unwrap();
    assert_eq!(
        json,
        r#"{"type":"Program","tasks":[{"type":"RoF","header":"Quiz 1","lines":[{"question":{"text":"Die Erde ist rund","punctuation":"."},"answer":{"isTrue":true}}]}]}"#
    );
}

#[test]
fn single_true_false_task_pretty() {
    let program = compile(&quiz_one(), &LoweringOptions::default()).unwrap();
    let json = FormatRegistry::default().serialize(&program, "json").unwrap();
    assert_snapshot!(json, @r###"
    {
      "type": "Program",
      "tasks": [
        {
          "type": "RoF",
          "header": "Quiz 1",
          "lines": [
            {
              "question": {
                "text": "Die Erde ist rund",
                "punctuation": "."
              },
              "answer": {
                "isTrue": true
              }
            }
          ]
        }
      ]
    }
    "###);
}

#[test]
fn output_is_deterministic() {
    let source = dog_cloze();
    let first = to_slim_json(&compile(&source, &LoweringOptions::default()).unwrap()).unwrap();
    let second = to_slim_json(&compile(&source, &LoweringOptions::default()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parsed_source_crosses_a_json_boundary() {
    let input = r#"{
        "tokens": [
            {"kind": "LETTERS", "text": "Quiz", "line": 1, "column": 0},
            {"kind": "NUMBER", "text": "1", "line": 1, "column": 5},
            {"kind": "RIGHT_OR_FALSE", "text": "RoF", "line": 1, "column": 7},
            {"kind": "COLON", "text": ":", "line": 1, "column": 10},
            {"kind": "LETTERS", "text": "Ja", "line": 1, "column": 12},
            {"kind": "PUNCTUATION", "text": "!", "line": 1, "column": 14},
            {"kind": "ANSWER_TRUE", "text": "wahr", "line": 1, "column": 16}
        ],
        "root": {"rule": "program", "children": [
            {"rule": "task_definition", "children": [
                {"rule": "endless_words", "children": [0, 1]},
                {"rule": "task", "children": [2, 3,
                    {"rule": "true_false_task", "children": [
                        {"rule": "question_or_statement", "children": [
                            {"rule": "sentence", "children": [
                                {"rule": "endless_words", "children": [4]}, 5
                            ]}
                        ]},
                        {"rule": "true_false_answer", "children": [6]}
                    ]}
                ]}
            ]}
        ]}
    }"#;
    let source: ParsedSource = serde_json::from_str(input).unwrap();
    let program = compile(&source, &LoweringOptions::default()).unwrap();
    assert_eq!(
        to_slim_json(&program).unwrap(),
        r#"{"type":"Program","tasks":[{"type":"RoF","header":"Quiz 1","lines":[{"question":{"text":"Ja","punctuation":"!"},"answer":{"isTrue":true}}]}]}"#
    );
}

#[test]
fn publish_writes_pretty_json_into_new_directories() {
    let program = compile(&quiz_one(), &LoweringOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("build").join("aufgaben.json");

    let result = publish(
        PublishSpec::new(&program, "json")
            .with_output_path(&path)
            .with_rules(JsonRules::default()),
    )
    .unwrap();

    assert_eq!(result.artifact, PublishArtifact::File(path.clone()));
    let written = fs::read_to_string(&path).unwrap();
    let expected = FormatRegistry::default().serialize(&program, "json").unwrap();
    assert_eq!(written, expected);
}
