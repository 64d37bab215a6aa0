use serde::{Deserialize, Serialize};

/// Configuration for the JSON formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRules {
    /// Spaces per nesting level in pretty output
    pub indent_width: usize,
}

impl Default for JsonRules {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}
