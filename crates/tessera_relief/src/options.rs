//! Compiler options shared by platform workshops.

use serde::{Deserialize, Serialize};

/// Codegen output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodegenMode {
    /// Generate a function body that reads helpers from the runtime global
    Function,
    /// Generate an ES module (default)
    #[default]
    Module,
}
