//! Mini-program compiler options.

use serde::{Deserialize, Serialize};
use tessera_carton::String;
use tessera_relief::CodegenMode;

/// Mini-program compiler options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MpCompilerOptions {
    /// Output mode: function or module
    #[serde(default)]
    pub mode: CodegenMode,

    /// Whether to prefix identifiers with `_ctx.`
    #[serde(default = "default_prefix_identifiers")]
    pub prefix_identifiers: bool,

    /// Runtime module name (module mode imports)
    #[serde(default = "default_runtime_module_name")]
    pub runtime_module_name: String,

    /// Runtime global name (function mode destructuring)
    #[serde(default = "default_runtime_global_name")]
    pub runtime_global_name: String,
}

fn default_prefix_identifiers() -> bool {
    true
}

fn default_runtime_module_name() -> String {
    String::const_new("vue")
}

fn default_runtime_global_name() -> String {
    String::const_new("Vue")
}

impl Default for MpCompilerOptions {
    fn default() -> Self {
        Self {
            mode: CodegenMode::Module,
            prefix_identifiers: default_prefix_identifiers(),
            runtime_module_name: default_runtime_module_name(),
            runtime_global_name: default_runtime_global_name(),
        }
    }
}

impl MpCompilerOptions {
    /// `with (_ctx)` function mode, identifiers left as written.
    pub fn function_mode() -> Self {
        Self {
            mode: CodegenMode::Function,
            prefix_identifiers: false,
            ..Self::default()
        }
    }
}
