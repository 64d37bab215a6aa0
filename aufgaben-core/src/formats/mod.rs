//! Format implementations
//!
//! Output formats for the domain tree, plus the tree dump used to inspect a
//! parsed source.

pub mod json;
pub mod treeviz;

pub use json::{JsonCompactFormat, JsonFormat, JsonRules};
