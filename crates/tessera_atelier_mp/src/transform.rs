//! Transform context shared by the mini-program transforms.

use tessera_relief::{CompilerError, RuntimeHelper};

use crate::options::MpCompilerOptions;

/// State threaded through the transforms of one element.
#[derive(Debug)]
pub struct TransformContext<'o> {
    pub options: &'o MpCompilerOptions,
    helpers: Vec<RuntimeHelper>,
    errors: Vec<CompilerError>,
}

impl<'o> TransformContext<'o> {
    pub fn new(options: &'o MpCompilerOptions) -> Self {
        Self {
            options,
            helpers: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Register a runtime helper usage
    pub fn helper(&mut self, helper: RuntimeHelper) {
        if !self.helpers.contains(&helper) {
            self.helpers.push(helper);
        }
    }

    /// Record a diagnostic; compilation continues.
    pub fn on_error(&mut self, error: CompilerError) {
        self.errors.push(error);
    }

    /// Used helpers in a stable order.
    pub fn helpers(&self) -> Vec<RuntimeHelper> {
        let mut helpers = self.helpers.clone();
        helpers.sort();
        helpers
    }

    pub fn into_errors(self) -> Vec<CompilerError> {
        self.errors
    }
}
