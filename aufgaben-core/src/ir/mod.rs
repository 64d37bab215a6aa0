//! Intermediate Representation (IR) of an exercise program.
//!
//!     The IR is what task lowering produces from the syntax tree: one record per
//!     task, holding its header and a [`nodes::TaskBody`] per exercise kind. It is
//!     deliberately loose where the grammar is: composite bodies are optional and
//!     annotated-sentence parts are plain `{text, annotation}` pairs. The domain
//!     converter (`crate::domain`) is where those looser shapes are validated.
//!
//!     - text:      readers for sentences, words and point literals
//!     - segments:  the shared decomposer for marking, cloze and correction
//!     - from_cst:  per-kind extractors and the program walk

pub mod from_cst;
pub mod nodes;
pub mod segments;
pub mod text;

pub use from_cst::{lower_program, LoweringOptions};
pub use segments::SentenceOrder;
