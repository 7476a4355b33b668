//! Atelier MP - The mini-program compiler workshop for Tessera.
//!
//! Compiles `v-on` event bindings of a template element into mini-program
//! output: a platform attribute per event (`bindtap`, `catch:foo-bar`, ...)
//! and a render function whose binding object holds the adapted handlers.
//!
//! # Example
//!
//! ```
//! use tessera_atelier_mp::{compile_element, MpCompilerOptions};
//! use tessera_relief::{DirectiveNode, SimpleExpressionNode, SourceLocation};
//!
//! let dir = DirectiveNode::on("click", SourceLocation::STUB)
//!     .with_exp(SimpleExpressionNode::new("onClick", false, SourceLocation::STUB));
//! let result = compile_element("view", &[dir], &MpCompilerOptions::default());
//!
//! assert_eq!(result.template, r#"<view bindtap="{{a}}"/>"#);
//! assert!(result.errors.is_empty());
//! ```

pub mod codegen;
pub mod event_names;
pub mod options;
pub mod transform;
pub mod transforms;

pub use codegen::{Binding, CodegenResult};
pub use event_names::EventType;
pub use options::MpCompilerOptions;
pub use transform::TransformContext;
pub use transforms::{
    classify_handler, parse_event_modifiers, prefix_identifiers, process_expression, process_v_on,
    transform_event_binding, EventModifiers,
};

use tessera_relief::{CompilerError, DirectiveNode};

/// Compilation result for one element
#[derive(Debug, Clone, Default)]
pub struct MpCompileResult {
    /// Rendered tag with event attributes
    pub template: String,
    /// Render function returning the binding object
    pub code: String,
    /// Imports or runtime global access
    pub preamble: String,
    /// Collected diagnostics
    pub errors: Vec<CompilerError>,
}

/// Compile the event bindings of one element.
///
/// Directives other than `v-on` are ignored.
pub fn compile_element(
    tag: &str,
    directives: &[DirectiveNode],
    options: &MpCompilerOptions,
) -> MpCompileResult {
    let mut ctx = TransformContext::new(options);

    let events: Vec<_> = directives
        .iter()
        .filter(|dir| dir.name == "on")
        .map(|dir| process_v_on(&mut ctx, dir))
        .collect();

    let bindings = codegen::assign_bindings(&events);
    let template = codegen::generate_template(tag, &events, &bindings);
    let CodegenResult { code, preamble } = codegen::generate(&bindings, &ctx.helpers(), options);

    MpCompileResult {
        template,
        code,
        preamble,
        errors: ctx.into_errors(),
    }
}
