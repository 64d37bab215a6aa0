//! JSON output formats
//!
//! Both formats serialize the domain tree with the slim rules (absent optional
//! fields omitted, minimal string escaping). `json` then re-indents the compact
//! text with [`pretty::prettify`]; `json-compact` emits it as is.

pub mod pretty;
pub mod rules;
pub mod slim;

use crate::domain::Program;
use crate::error::Result;
use crate::format::Format;

pub use pretty::prettify;
pub use rules::JsonRules;
pub use slim::{to_slim_json, SlimFormatter};

/// Pretty-printed slim JSON, the default output.
#[derive(Default)]
pub struct JsonFormat {
    rules: JsonRules,
}

impl JsonFormat {
    pub fn new(rules: JsonRules) -> Self {
        Self { rules }
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Slim JSON, indented"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, program: &Program) -> Result<String> {
        let compact = to_slim_json(program)?;
        Ok(prettify(&compact, self.rules.indent_width))
    }
}

/// Slim JSON on a single line.
#[derive(Default)]
pub struct JsonCompactFormat;

impl Format for JsonCompactFormat {
    fn name(&self) -> &str {
        "json-compact"
    }

    fn description(&self) -> &str {
        "Slim JSON, single line"
    }

    fn serialize(&self, program: &Program) -> Result<String> {
        to_slim_json(program)
    }
}
