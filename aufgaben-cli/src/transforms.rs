//! CLI-specific transforms
//!
//! This module defines all the inspection views available in the CLI.
//! Each transform is a stage + format combination (e.g., "cst-treeviz", "ir-json").
//!
//! ## Transform Pipeline
//!
//! The input is always a parsed source document (tokens plus syntax tree, as
//! JSON). From there:
//!
//! 1. **Tokens** - the token stream as handed over
//!    - `token-json`: JSON array of tokens
//!    - `token-simple`: one `KIND text` line per token
//!
//! 2. **Syntax tree**
//!    - `cst-treeviz`: Tree visualization with box connectors
//!    - `cst-text`: The whole source, detokenized
//!
//! 3. **Lowering** - syntax tree → Intermediate Representation (IR)
//!    - `ir-json`: IR as indented JSON
//!
//! 4. **Conversion** - IR → domain tree (the published output)
//!    - `domain-json`: indented slim JSON
//!    - `domain-compact`: single-line slim JSON
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `show-tokens`: When set to "true", `cst-treeviz` lists token leaves too.
//!
//! Example: `aufgaben inspect quiz.cst.json cst-treeviz --extra-show-tokens`

use aufgaben_core::cst::ParsedSource;
use aufgaben_core::detokenizer::detokenize;
use aufgaben_core::formats::json::{prettify, to_slim_json, JsonRules};
use aufgaben_core::formats::treeviz::to_treeviz_str_with_params;
use aufgaben_core::{to_domain, to_ir, FormatRegistry, LoweringOptions};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-json",
    "token-simple",
    "cst-treeviz",
    "cst-text",
    "ir-json",
    "domain-json",
    "domain-compact",
];

/// Execute a named transform on a parsed source document
///
/// # Arguments
///
/// * `source` - JSON text of a [`ParsedSource`]
/// * `transform_name` - The transform to apply (e.g., "cst-treeviz", "ir-json")
/// * `extra_params` - Optional parameters for the transform
/// * `options` - Lowering options for the `ir-*` and `domain-*` transforms
/// * `rules` - JSON layout for the indented outputs
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
    options: &LoweringOptions,
    rules: &JsonRules,
) -> Result<String, String> {
    let parsed = parse_source(source)?;

    match transform_name {
        "token-json" => serde_json::to_string_pretty(&parsed.tokens)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "token-simple" => Ok(tokens_to_simple(&parsed)),
        "cst-treeviz" => Ok(to_treeviz_str_with_params(&parsed, extra_params)),
        "cst-text" => Ok(detokenize(parsed.view(), parsed.root.span(), true)),
        "ir-json" => {
            let ir = to_ir(&parsed, options).map_err(|e| format!("Transform failed: {e}"))?;
            let compact = to_slim_json(&ir).map_err(|e| format!("JSON serialization failed: {e}"))?;
            Ok(prettify(&compact, rules.indent_width))
        }
        "domain-json" | "domain-compact" => {
            let ir = to_ir(&parsed, options).map_err(|e| format!("Transform failed: {e}"))?;
            let program = to_domain(ir).map_err(|e| format!("Transform failed: {e}"))?;
            let format = if transform_name == "domain-json" {
                "json"
            } else {
                "json-compact"
            };
            FormatRegistry::with_json_rules(rules.clone())
                .serialize(&program, format)
                .map_err(|e| format!("Transform failed: {e}"))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

/// Read a parsed source document from its JSON text.
pub fn parse_source(source: &str) -> Result<ParsedSource, String> {
    if source.trim().is_empty() {
        return Err("input is empty".to_string());
    }
    serde_json::from_str(source).map_err(|e| format!("invalid parsed source: {e}"))
}

fn tokens_to_simple(parsed: &ParsedSource) -> String {
    parsed
        .tokens
        .iter()
        .map(|token| {
            format!(
                "{} {}",
                token.kind.simple_name(),
                token.text.replace('\n', "\\n")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
