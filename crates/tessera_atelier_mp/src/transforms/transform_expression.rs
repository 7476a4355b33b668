//! Expression transform.
//!
//! Classifies handler expressions by shape and prefixes free identifiers with
//! `_ctx.` so that render functions read them from the component context.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentTargetPropertyIdentifier, BindingIdentifier, ChainElement,
    Expression, Function, IdentifierReference, ObjectProperty, PropertyKey, Statement,
};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use oxc_syntax::scope::ScopeFlags;
use tessera_carton::{is_global_allowed, is_render_local, String};
use tessera_relief::{CompilerError, ErrorCode, HandlerExpression, SourceLocation};

use std::string::String as StdString;

use crate::transform::TransformContext;

const CTX_PREFIX: &str = "_ctx.";

fn source_type() -> SourceType {
    SourceType::default().with_module(true)
}

/// Parse `source` as a single expression covering all of it.
///
/// The expression parser stops after the first expression, so anything
/// trailing it (`;`, a second statement) means this is not one expression.
fn parse_whole_expression<'a>(
    allocator: &'a Allocator,
    source: &'a str,
) -> Option<Expression<'a>> {
    let expr = Parser::new(allocator, source, source_type())
        .parse_expression()
        .ok()?;
    (expr.span().end as usize == source.trim_end().len()).then_some(expr)
}

/// Strip redundant parentheses: `(foo.bar)` is still a reference.
fn without_parens<'e, 'a>(mut expr: &'e Expression<'a>) -> &'e Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}

/// Classify a handler expression by its shape.
///
/// Function literals and member references are recognized from a single
/// parsed expression; anything that only parses as a program is split into
/// its statements. Text that parses neither way is kept as one inline
/// statement so the prefixing pass can report it.
pub fn classify_handler(content: &str) -> HandlerExpression {
    let source = content.trim();
    let allocator = Allocator::default();

    if let Some(expr) = parse_whole_expression(&allocator, source) {
        return match without_parens(&expr) {
            Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_) => {
                HandlerExpression::FunctionLiteral(String::from(source))
            }
            Expression::Identifier(_)
            | Expression::StaticMemberExpression(_)
            | Expression::ComputedMemberExpression(_)
            | Expression::PrivateFieldExpression(_) => {
                HandlerExpression::Reference(String::from(source))
            }
            Expression::ChainExpression(chain)
                if matches!(
                    chain.expression,
                    ChainElement::StaticMemberExpression(_)
                        | ChainElement::ComputedMemberExpression(_)
                        | ChainElement::PrivateFieldExpression(_)
                ) =>
            {
                HandlerExpression::Reference(String::from(source))
            }
            _ => HandlerExpression::InlineStatement(String::from(source)),
        };
    }

    let ret = Parser::new(&allocator, source, source_type()).parse();
    if !ret.errors.is_empty() || ret.program.body.is_empty() {
        return HandlerExpression::InlineStatement(String::from(source));
    }

    let statements = ret
        .program
        .body
        .iter()
        .filter(|stmt| !matches!(stmt, Statement::EmptyStatement(_)))
        .map(|stmt| {
            let span = stmt.span();
            let text = source[span.start as usize..span.end as usize].trim();
            String::from(text.trim_end_matches(';').trim_end())
        })
        .filter(|text| !text.is_empty())
        .collect();

    HandlerExpression::Statements(statements)
}

/// Prefix free identifiers in `content` with `_ctx.`.
///
/// Returns `None` when `content` parses neither as an expression nor as a
/// sequence of statements.
pub fn prefix_identifiers(content: &str) -> Option<StdString> {
    let allocator = Allocator::default();
    let mut prefixer = IdentifierPrefixer::default();

    match parse_whole_expression(&allocator, content) {
        Some(expr) => prefixer.visit_expression(&expr),
        None => {
            let ret = Parser::new(&allocator, content, source_type()).parse();
            if !ret.errors.is_empty() {
                return None;
            }
            for stmt in &ret.program.body {
                prefixer.visit_statement(stmt);
            }
        }
    }

    Some(prefixer.apply(content))
}

/// Run the prefixing pass when enabled, reporting unparsable expressions.
pub fn process_expression(
    ctx: &mut TransformContext<'_>,
    content: &str,
    loc: &SourceLocation,
) -> StdString {
    if !ctx.options.prefix_identifiers {
        return content.to_string();
    }

    match prefix_identifiers(content) {
        Some(code) => code,
        None => {
            tracing::trace!(expression = content, "expression did not parse, left as written");
            ctx.on_error(CompilerError::with_detail(
                ErrorCode::InvalidExpression,
                loc.clone(),
                content,
            ));
            content.to_string()
        }
    }
}

/// Reprint a multi-line function literal on one line.
///
/// Block bodies become `{ a; b; }` and `function(` gains its space, so
/// handlers written across several template lines produce the same code as
/// their single-line form. Single-line literals and expression-bodied arrows
/// are returned trimmed but otherwise untouched.
pub fn collapse_function_literal(code: &str) -> StdString {
    let source = code.trim();
    if !source.contains('\n') {
        return source.to_string();
    }

    let allocator = Allocator::default();
    let Some(expr) = parse_whole_expression(&allocator, source) else {
        return source.to_string();
    };

    let (start, body) = match &expr {
        Expression::ArrowFunctionExpression(arrow) if !arrow.expression => {
            (arrow.span.start, Some(&*arrow.body))
        }
        Expression::FunctionExpression(func) => (func.span.start, func.body.as_deref()),
        _ => return source.to_string(),
    };
    let Some(body) = body else {
        return source.to_string();
    };

    let head = source[start as usize..body.span.start as usize]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("function(", "function (");

    let statements: Vec<&str> = body
        .statements
        .iter()
        .filter(|stmt| !matches!(stmt, Statement::EmptyStatement(_)))
        .map(|stmt| {
            let span = stmt.span();
            source[span.start as usize..span.end as usize]
                .trim()
                .trim_end_matches(';')
                .trim_end()
        })
        .collect();

    if statements.is_empty() {
        return [head.as_str(), " {}"].concat();
    }

    let mut out = head;
    out.push_str(" {");
    for stmt in statements {
        out.push(' ');
        out.push_str(stmt);
        out.push(';');
    }
    out.push_str(" }");
    out
}

/// Collects `(start, end, replacement)` edits for free identifiers.
#[derive(Debug, Default)]
struct IdentifierPrefixer {
    /// Names bound by enclosing function parameters or declarations
    locals: Vec<StdString>,
    rewrites: Vec<(u32, u32, StdString)>,
}

impl IdentifierPrefixer {
    fn needs_prefix(&self, name: &str) -> bool {
        !is_global_allowed(name)
            && !is_render_local(name)
            && !self.locals.iter().any(|local| local == name)
    }

    fn apply(mut self, content: &str) -> StdString {
        self.rewrites.sort_by(|a, b| b.0.cmp(&a.0));

        let mut result = content.to_string();
        for (start, end, replacement) in self.rewrites {
            let (start, end) = (start as usize, end as usize);
            if start <= end && end <= result.len() {
                result.replace_range(start..end, &replacement);
            }
        }
        result
    }
}

impl<'a> Visit<'a> for IdentifierPrefixer {
    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        if self.needs_prefix(ident.name.as_str()) {
            self.rewrites
                .push((ident.span.start, ident.span.start, StdString::from(CTX_PREFIX)));
        }
    }

    fn visit_object_property(&mut self, prop: &ObjectProperty<'a>) {
        if prop.shorthand {
            if let PropertyKey::StaticIdentifier(ident) = &prop.key {
                let name = ident.name.as_str();
                if self.needs_prefix(name) {
                    let replacement = [name, ": ", CTX_PREFIX, name].concat();
                    self.rewrites
                        .push((prop.span.start, prop.span.end, replacement));
                }
                return;
            }
        }

        walk::walk_object_property(self, prop);
    }

    /// `({ a } = b)` destructures into the context: `({ a: _ctx.a } = _ctx.b)`.
    fn visit_assignment_target_property_identifier(
        &mut self,
        prop: &AssignmentTargetPropertyIdentifier<'a>,
    ) {
        let name = prop.binding.name.as_str();
        if self.needs_prefix(name) {
            let replacement = [name, ": ", CTX_PREFIX, name].concat();
            self.rewrites
                .push((prop.binding.span.start, prop.binding.span.end, replacement));
        }
        if let Some(init) = &prop.init {
            self.visit_expression(init);
        }
    }

    /// Parameters, function names and declarations shadow context members.
    fn visit_binding_identifier(&mut self, ident: &BindingIdentifier<'a>) {
        self.locals.push(ident.name.to_string());
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        let mark = self.locals.len();
        walk::walk_arrow_function_expression(self, arrow);
        self.locals.truncate(mark);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        let mark = self.locals.len();
        walk::walk_function(self, func, flags);
        self.locals.truncate(mark);
    }
}
