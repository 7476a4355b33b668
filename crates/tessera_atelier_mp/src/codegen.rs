//! Render function and template attribute generation.
//!
//! Mini-program render functions return a flat binding object; the template
//! refers to each entry by its short name (`bindtap="{{a}}"`).

use tessera_carton::binding_name;
use tessera_relief::{CodegenMode, EventCodegenNode, RuntimeHelper};

use crate::options::MpCompilerOptions;

/// Code generation context
pub struct CodegenContext {
    code: String,
    indent_level: u32,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self {
            code: String::with_capacity(256),
            indent_level: 0,
        }
    }

    /// Push string to buffer
    #[inline]
    pub fn push(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Add newline with proper indentation
    #[inline]
    pub fn newline(&mut self) {
        self.code.push('\n');
        for _ in 0..self.indent_level {
            self.code.push_str("  ");
        }
    }

    /// Empty line without trailing indentation
    #[inline]
    pub fn blank_line(&mut self) {
        self.code.push('\n');
    }

    #[inline]
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    #[inline]
    pub fn deindent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn into_code(self) -> String {
        self.code
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Code generation result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodegenResult {
    /// Render function
    pub code: String,
    /// Imports or runtime global access hoisted above the render function
    pub preamble: String,
}

/// One binding object entry: short name plus its value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: String,
}

/// Assign short binding names to event codegen nodes in order.
pub fn assign_bindings(events: &[EventCodegenNode]) -> Vec<Binding> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| Binding {
            name: binding_name(index).to_string(),
            value: event.value(),
        })
        .collect()
}

/// Render the element tag with its event attributes.
pub fn generate_template(tag: &str, events: &[EventCodegenNode], bindings: &[Binding]) -> String {
    let mut out = String::with_capacity(tag.len() + 3 + events.len() * 20);
    out.push('<');
    out.push_str(tag);
    for (event, binding) in events.iter().zip(bindings) {
        out.push(' ');
        out.push_str(&event.attr_name);
        out.push_str("=\"{{");
        out.push_str(&binding.name);
        out.push_str("}}\"");
    }
    out.push_str("/>");
    out
}

/// Generate the render function returning the binding object.
pub fn generate(
    bindings: &[Binding],
    helpers: &[RuntimeHelper],
    options: &MpCompilerOptions,
) -> CodegenResult {
    let mut ctx = CodegenContext::new();
    let is_function = options.mode == CodegenMode::Function;
    let use_with_block = is_function && !options.prefix_identifiers;

    ctx.push("(_ctx, _cache) => {");
    ctx.indent();

    if use_with_block {
        ctx.newline();
        ctx.push("with (_ctx) {");
        ctx.indent();
    }

    if is_function && !helpers.is_empty() {
        ctx.newline();
        ctx.push(&destructure_helpers(helpers));
        ctx.blank_line();
    }

    ctx.newline();
    ctx.push("return ");
    generate_binding_object(&mut ctx, bindings);

    if use_with_block {
        ctx.deindent();
        ctx.newline();
        ctx.push("}");
    }

    ctx.deindent();
    ctx.newline();
    ctx.push("}");

    CodegenResult {
        code: ctx.into_code(),
        preamble: generate_preamble(helpers, options),
    }
}

fn generate_binding_object(ctx: &mut CodegenContext, bindings: &[Binding]) {
    if bindings.is_empty() {
        ctx.push("{}");
        return;
    }
    ctx.push("{ ");
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            ctx.push(", ");
        }
        ctx.push(&binding.name);
        ctx.push(": ");
        ctx.push(&binding.value);
    }
    ctx.push(" }");
}

/// `const { vOn: _vOn } = _Vue`
fn destructure_helpers(helpers: &[RuntimeHelper]) -> String {
    let list = helpers
        .iter()
        .map(|h| [h.name(), ": ", h.alias()].concat())
        .collect::<Vec<_>>()
        .join(", ");
    ["const { ", &list, " } = _Vue"].concat()
}

fn generate_preamble(helpers: &[RuntimeHelper], options: &MpCompilerOptions) -> String {
    if helpers.is_empty() {
        return String::new();
    }
    match options.mode {
        CodegenMode::Module => {
            let list = helpers
                .iter()
                .map(|h| [h.name(), " as ", h.alias()].concat())
                .collect::<Vec<_>>()
                .join(", ");
            [
                "import { ",
                &list,
                " } from \"",
                options.runtime_module_name.as_str(),
                "\"",
            ]
            .concat()
        }
        CodegenMode::Function => ["const _Vue = ", options.runtime_global_name.as_str()].concat(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_relief::{HandlerCode, SourceLocation};

    fn tap(handler: &str) -> EventCodegenNode {
        EventCodegenNode {
            attr_name: "bindtap".into(),
            handler: HandlerCode::Reference(handler.into()),
            helper: RuntimeHelper::VOn,
            loc: SourceLocation::STUB,
        }
    }

    #[test]
    fn test_context_indentation() {
        let mut ctx = CodegenContext::new();
        ctx.push("{");
        ctx.indent();
        ctx.newline();
        ctx.push("a");
        ctx.deindent();
        ctx.newline();
        ctx.push("}");
        assert_eq!(ctx.into_code(), "{\n  a\n}");
    }

    #[test]
    fn test_template_attributes() {
        let events = vec![tap("_ctx.a"), tap("_ctx.b")];
        let bindings = assign_bindings(&events);
        assert_eq!(bindings[1].name, "b");
        assert_eq!(
            generate_template("view", &events, &bindings),
            r#"<view bindtap="{{a}}" bindtap="{{b}}"/>"#
        );
    }

    #[test]
    fn test_module_mode() {
        let bindings = assign_bindings(&[tap("_ctx.onClick")]);
        let result = generate(&bindings, &[RuntimeHelper::VOn], &MpCompilerOptions::default());
        assert_eq!(result.preamble, r#"import { vOn as _vOn } from "vue""#);
        assert_eq!(
            result.code,
            "(_ctx, _cache) => {\n  return { a: _vOn(_ctx.onClick) }\n}"
        );
    }

    #[test]
    fn test_function_mode_with_block() {
        let bindings = assign_bindings(&[tap("onClick")]);
        let result = generate(&bindings, &[RuntimeHelper::VOn], &MpCompilerOptions::function_mode());
        assert_eq!(result.preamble, "const _Vue = Vue");
        assert_eq!(
            result.code,
            "(_ctx, _cache) => {\n  with (_ctx) {\n    const { vOn: _vOn } = _Vue\n\n    return { a: _vOn(onClick) }\n  }\n}"
        );
    }

    #[test]
    fn test_no_bindings() {
        let result = generate(&[], &[], &MpCompilerOptions::default());
        assert_eq!(result.preamble, "");
        assert_eq!(result.code, "(_ctx, _cache) => {\n  return {}\n}");
    }
}
