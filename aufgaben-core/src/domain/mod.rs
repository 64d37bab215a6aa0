//! Strictly typed, kind-discriminated domain tree.
//!
//!     The domain is what gets serialized. Each [`nodes::Task`] variant is one
//!     exercise kind; interleaved kinds hold [`nodes::AnnotatedSentence`] values
//!     whose parts are a proper sum of plain text and annotation payload.

pub mod from_ir;
pub mod nodes;

pub use from_ir::convert_program;
pub use nodes::{AnnotatedSentence, Annotation, Part, Program, Task};
