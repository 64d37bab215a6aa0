//! Lowering of parsed exercise descriptions to a typed exercise tree
//!
//!     This crate takes the concrete syntax tree of an exercise description (as produced by the
//!     grammar front end, together with its token stream) and turns it into the typed domain tree
//!     that downstream tools consume, serialized as slim JSON.
//!
//!     TLDR:
//!         - The front end is not part of this crate. Its output arrives as a [`cst::ParsedSource`].
//!         - Everything between the tree and the JSON text is a pure function, no I/O until publish.
//!         - The first error aborts the run. There is no partial output.
//!
//! Architecture
//!
//!     The pipeline has three stages, each a pure function over owned data:
//!
//!         ParsedSource  --lower_program-->  ir::Program  --convert_program-->  domain::Program
//!                                                                                  |
//!                                                           Format::serialize <----+
//!
//!     The IR (./ir) mirrors the grammar: one body per task kind, annotated sentences as flat
//!     part lists, point values already parsed and validated. Reading sentences back from tokens
//!     is the job of the detokenizer (./detokenizer.rs), which knows nothing about tasks.
//!
//!     The domain tree (./domain) is what gets published. It differs from the IR in two places:
//!     annotated sentences become tagged part lists, and the kind-less fallback body is rejected.
//!
//!     The file structure :
//!     .
//!     ├── cst                     # Token stream and syntax tree input model
//!     ├── detokenizer.rs          # Tokens back to readable text
//!     ├── ir
//!     │   ├── nodes.rs            # IR types
//!     │   ├── text.rs             # Words, sentences and point literals
//!     │   ├── segments.rs         # Annotated sentence decomposition
//!     │   └── from_cst.rs         # Per-kind extractors
//!     ├── domain
//!     │   ├── nodes.rs            # Published types
//!     │   └── from_ir.rs          # IR to domain conversion
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── json                # Slim JSON, compact and pretty
//!     │   └── treeviz             # Syntax tree dump for inspection
//!     ├── publish.rs              # Serialize and write
//!     └── error.rs
//!
//! Testing
//!
//!     Unit tests live next to the code they test. End to end cases, built with
//!     [`cst::CstBuilder`] the way the front end would shape them, are under tests/.
//!
pub mod cst;
pub mod detokenizer;
pub mod domain;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod publish;
pub mod registry;

pub use error::{Error, Result};
pub use format::Format;
pub use ir::{LoweringOptions, SentenceOrder};
pub use registry::FormatRegistry;

/// Lowers a parsed source to the Intermediate Representation (IR).
///
/// Fails before lowering anything if the front end reported diagnostics.
pub fn to_ir(source: &cst::ParsedSource, options: &LoweringOptions) -> Result<ir::nodes::Program> {
    ir::lower_program(source, options)
}

/// Converts an IR program to the published domain tree.
pub fn to_domain(program: ir::nodes::Program) -> Result<domain::Program> {
    domain::convert_program(program)
}

/// Runs both stages: parsed source to domain tree.
pub fn compile(source: &cst::ParsedSource, options: &LoweringOptions) -> Result<domain::Program> {
    to_domain(to_ir(source, options)?)
}
