//! Publishing pipeline for converted exercise sets.
//!
//! Provides a single call that selects a format, serializes the domain tree
//! and optionally writes the result to disk. Nothing is written unless the
//! serialization succeeded, so a failing conversion never leaves a partial
//! file behind.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::domain::Program;
use crate::error::{Error, Result};
use crate::formats::json::JsonRules;
use crate::registry::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish an exercise set.
///
/// ```ignore
/// let spec = PublishSpec::new(&program, "json")
///     .with_output_path("out/aufgaben.json");
/// ```
///
/// If no output path is provided the content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The converted exercise set.
    pub program: &'a Program,
    /// Target format name (e.g. "json", "json-compact").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Layout rules for the pretty JSON format.
    pub rules: JsonRules,
}

impl<'a> PublishSpec<'a> {
    pub fn new(program: &'a Program, format: &'a str) -> Self {
        Self {
            program,
            format,
            output: None,
            rules: JsonRules::default(),
        }
    }

    /// Sets the output file path. Missing parent directories are created.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_rules(mut self, rules: JsonRules) -> Self {
        self.rules = rules;
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes an exercise set as described by `spec`.
///
/// # Errors
///
/// Returns [`Error`] if the format is not registered, serialization fails or
/// the file cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult> {
    let registry = FormatRegistry::with_json_rules(spec.rules);
    let text = registry.serialize(spec.program, spec.format)?;
    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(path, text)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
    }
    fs::write(&path, text.as_bytes()).map_err(|err| Error::io(&path, err))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(path)
}
