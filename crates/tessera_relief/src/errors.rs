//! Compiler diagnostics.
//!
//! Diagnostics never abort compilation: transforms collect them and hand them
//! back next to their (possibly partial) output.

use serde::{Deserialize, Serialize};
use tessera_carton::String;

use crate::ast::SourceLocation;

/// Compiler error codes, numbered like the Vue compiler's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ErrorCode {
    /// `v-on` without an expression and without any modifier
    VOnNoExpression = 35,
    /// Expression that does not parse as JavaScript
    InvalidExpression = 45,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::VOnNoExpression => "v-on is missing expression.",
            Self::InvalidExpression => "Error parsing JavaScript expression.",
        }
    }
}

/// A diagnostic with its source range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({}:{})", .loc.start.line, .loc.start.column)]
pub struct CompilerError {
    pub code: ErrorCode,
    pub loc: SourceLocation,
    pub message: String,
}

impl CompilerError {
    pub fn new(code: ErrorCode, loc: SourceLocation) -> Self {
        Self {
            code,
            loc,
            message: String::const_new(code.message()),
        }
    }

    /// Same code, with extra detail appended to the message.
    pub fn with_detail(code: ErrorCode, loc: SourceLocation, detail: &str) -> Self {
        let mut message = String::from(code.message());
        message.push(' ');
        message.push_str(detail);
        Self { code, loc, message }
    }
}
