//! Treeviz dump of a concrete syntax tree
//!
//! One line per rule node, nesting drawn with box connectors:
//!
//! <prefix><connector> <rule> <label> (label truncated to 30 characters)
//!
//! The label is the detokenized text the node covers. With `show-tokens` the
//! token leaves are listed too, as `◦ KIND 'text'`.
//!
//! Example:
//!
//!   ⧉ program (1 tasks, 10 tokens)
//!   └─ task_definition Quiz 1 RoF:Die Erde ist rund.…
//!     ├─ endless_words Quiz 1
//!     └─ task RoF:Die Erde ist rund.wahr
//!       └─ true_false_task Die Erde ist rund.wahr

use crate::cst::{ParsedSource, Rule, SyntaxElement, SyntaxNode, Tokens};
use crate::detokenizer::detokenize_node;
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

fn format_node(
    node: &SyntaxNode,
    tokens: Tokens<'_>,
    prefix: &str,
    is_last: bool,
    show_tokens: bool,
) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let label = truncate(&detokenize_node(node, tokens, false));
    let mut output = if label.is_empty() {
        format!("{prefix}{connector} {}\n", node.rule.name())
    } else {
        format!("{prefix}{connector} {} {label}\n", node.rule.name())
    };

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let shown: Vec<&SyntaxElement> = node
        .children
        .iter()
        .filter(|child| show_tokens || matches!(child, SyntaxElement::Node(_)))
        .collect();

    for (i, child) in shown.iter().enumerate() {
        let last = i == shown.len() - 1;
        match child {
            SyntaxElement::Node(child) => {
                output.push_str(&format_node(child, tokens, &child_prefix, last, show_tokens));
            }
            SyntaxElement::Token(index) => {
                let connector = if last { "└─" } else { "├─" };
                let line = match tokens.get(*index) {
                    Some(token) => format!(
                        "{child_prefix}{connector} ◦ {} '{}'\n",
                        token.kind.simple_name(),
                        token.text.replace('\n', "\\n")
                    ),
                    None => format!("{child_prefix}{connector} ◦ #{index} (out of range)\n"),
                };
                output.push_str(&line);
            }
        }
    }
    output
}

fn truncate(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        return label.to_string();
    }
    let mut out: String = label.chars().take(LABEL_WIDTH - 1).collect();
    out.push('…');
    out
}

pub fn to_treeviz_str(source: &ParsedSource) -> String {
    to_treeviz_str_with_params(source, &HashMap::new())
}

/// Render the tree with optional parameters
///
/// # Parameters
///
/// - `"show-tokens"`: when `"true"`, token leaves are listed under their node.
pub fn to_treeviz_str_with_params(source: &ParsedSource, params: &HashMap<String, String>) -> String {
    let show_tokens = params
        .get("show-tokens")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    let tokens = source.view();
    let root = &source.root;
    let mut output = format!(
        "⧉ {} ({} tasks, {} tokens)\n",
        root.rule.name(),
        root.child_nodes(Rule::TaskDefinition).count(),
        tokens.len()
    );

    let children: Vec<&SyntaxNode> = root
        .children
        .iter()
        .filter_map(|child| match child {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        })
        .collect();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(
            child,
            tokens,
            "",
            i == children.len() - 1,
            show_tokens,
        ));
    }
    output
}
