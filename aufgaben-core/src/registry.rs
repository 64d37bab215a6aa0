//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available output
//! formats. Formats can be registered and retrieved by name.

use crate::domain::Program;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::formats::json::{JsonCompactFormat, JsonFormat, JsonRules};
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new();
/// registry.register(MyFormat);
///
/// let text = registry.serialize(&program, "my-format")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| Error::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Serialize a domain tree using the specified format
    pub fn serialize(&self, program: &Program, format: &str) -> Result<String> {
        let fmt = self.get(format)?;
        let text = fmt.serialize(program)?;
        tracing::debug!(format, bytes = text.len(), "serialized program");
        Ok(text)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        Self::with_json_rules(JsonRules::default())
    }

    /// Built-in formats, with the pretty JSON format using `rules`
    pub fn with_json_rules(rules: JsonRules) -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormat::new(rules));
        registry.register(JsonCompactFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
