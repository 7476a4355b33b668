//! v-on directive transform.
//!
//! Turns an event directive (`v-on:click`, `@tap.stop`) into a platform
//! attribute name and a handler wrapped with the `_vOn` runtime adapter.

use tessera_carton::{String, EVENT_ARG};
use tessera_relief::{
    CompilerError, DirectiveNode, ErrorCode, EventCodegenNode, HandlerCode, HandlerExpression,
    RuntimeHelper, SimpleExpressionNode,
};

use super::transform_expression::{
    classify_handler, collapse_function_literal, process_expression,
};
use crate::event_names::{format_dynamic_event_attr, format_event_attr, EventType};
use crate::options::MpCompilerOptions;
use crate::transform::TransformContext;

/// Event modifier flags
#[derive(Debug, Clone, Default)]
pub struct EventModifiers {
    pub stop: bool,
    pub prevent: bool,
    pub self_: bool,
    pub capture: bool,
    pub once: bool,
    pub passive: bool,
    pub keys: Vec<String>,
}

impl EventModifiers {
    /// `stop` and `prevent` both bind with `catch`.
    pub fn is_catch(&self) -> bool {
        self.stop || self.prevent
    }

    pub fn event_type(&self) -> EventType {
        EventType::new(self.is_catch(), self.capture)
    }
}

/// Parse event modifiers from directive modifiers
pub fn parse_event_modifiers(modifiers: &[SimpleExpressionNode]) -> EventModifiers {
    let mut result = EventModifiers::default();

    for modifier in modifiers {
        match modifier.content.as_str() {
            "stop" => result.stop = true,
            "prevent" => result.prevent = true,
            "self" => result.self_ = true,
            "capture" => result.capture = true,
            "once" => result.once = true,
            "passive" => result.passive = true,
            _ => result.keys.push(modifier.content.clone()),
        }
    }

    result
}

/// Transform one event binding on its own.
pub fn transform_event_binding(
    dir: &DirectiveNode,
    options: &MpCompilerOptions,
) -> (EventCodegenNode, Vec<CompilerError>) {
    let mut ctx = TransformContext::new(options);
    let node = process_v_on(&mut ctx, dir);
    (node, ctx.into_errors())
}

/// Transform a v-on directive within a shared context.
pub fn process_v_on(ctx: &mut TransformContext<'_>, dir: &DirectiveNode) -> EventCodegenNode {
    let modifiers = parse_event_modifiers(&dir.modifiers);
    let attr_name = event_attr_name(ctx, dir, &modifiers);

    let exp = dir
        .exp
        .as_ref()
        .filter(|exp| !exp.content.trim().is_empty());

    let handler = match exp {
        Some(exp) => process_handler(ctx, exp),
        None => {
            // modifier-only bindings like `@tap.stop` exist to stop propagation
            if dir.modifiers.is_empty() {
                ctx.on_error(CompilerError::new(
                    ErrorCode::VOnNoExpression,
                    dir.loc.clone(),
                ));
            }
            HandlerCode::Noop
        }
    };

    ctx.helper(RuntimeHelper::VOn);

    EventCodegenNode {
        attr_name,
        handler,
        helper: RuntimeHelper::VOn,
        loc: dir.loc.clone(),
    }
}

fn event_attr_name(
    ctx: &mut TransformContext<'_>,
    dir: &DirectiveNode,
    modifiers: &EventModifiers,
) -> String {
    let event_type = modifiers.event_type();
    match &dir.arg {
        Some(arg) if arg.is_static => format_event_attr(&arg.content, event_type),
        Some(arg) => {
            let exp = process_expression(ctx, &arg.content, &arg.loc);
            format_dynamic_event_attr(&exp, event_type)
        }
        None => String::from(event_type.as_str()),
    }
}

fn process_handler(ctx: &mut TransformContext<'_>, exp: &SimpleExpressionNode) -> HandlerCode {
    match classify_handler(&exp.content) {
        HandlerExpression::Reference(code) => {
            HandlerCode::Reference(String::from(process_expression(ctx, &code, &exp.loc)))
        }
        HandlerExpression::FunctionLiteral(code) => {
            let code = process_expression(ctx, &code, &exp.loc);
            HandlerCode::FunctionLiteral(String::from(collapse_function_literal(&code)))
        }
        HandlerExpression::InlineStatement(code) => {
            let body = process_expression(ctx, &code, &exp.loc);
            let mut handler = String::from(EVENT_ARG);
            handler.push_str(" => ");
            // an object literal body would read as a block
            if body.starts_with('{') {
                handler.push('(');
                handler.push_str(&body);
                handler.push(')');
            } else {
                handler.push_str(&body);
            }
            HandlerCode::Arrow(handler)
        }
        HandlerExpression::Statements(statements) => {
            let mut handler = String::from(EVENT_ARG);
            handler.push_str(" => {");
            for stmt in &statements {
                handler.push(' ');
                handler.push_str(&process_expression(ctx, stmt, &exp.loc));
                handler.push(';');
            }
            handler.push_str(" }");
            HandlerCode::Arrow(handler)
        }
    }
}
