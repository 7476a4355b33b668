//! Relief - The sculptured AST surface for Tessera templates.
//!
//! Holds the node types the mini-program compiler consumes and produces for
//! event directives, the diagnostics it reports, and the shared compiler
//! options.

pub mod ast;
pub mod errors;
pub mod options;

pub use ast::*;
pub use errors::{CompilerError, ErrorCode};
pub use options::CodegenMode;
