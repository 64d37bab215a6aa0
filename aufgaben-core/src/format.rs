//! Format trait definition
//!
//! This module defines the Format trait that every output format implements.
//! A format turns the domain tree into text; selection by name goes through
//! the [`FormatRegistry`](crate::registry::FormatRegistry).

use crate::domain::Program;
use crate::error::Result;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, program: &Program) -> Result<String> {
///         // Serialize the domain tree to a string
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "json-compact")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a domain tree into text
    fn serialize(&self, program: &Program) -> Result<String>;
}
