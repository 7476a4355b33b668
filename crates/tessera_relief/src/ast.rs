//! Template AST node types for event directives.
//!
//! The general template parser lives outside this workspace; these nodes are
//! the narrow surface it hands to the `v-on` transform, plus the codegen node
//! the transform hands back.

use serde::{Deserialize, Serialize};
use tessera_carton::String;

/// Source position in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position reached after consuming `text` from `self`.
    pub fn advance(self, text: &str) -> Self {
        let mut pos = self;
        for c in text.chars() {
            pos.offset += c.len_utf8() as u32;
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
        }
        pos
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl SourceLocation {
    /// Stub location for generated nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        source: String::const_new(""),
    };

    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }

    /// Location covering `source` when it begins at `start`.
    pub fn spanning(start: Position, source: &str) -> Self {
        Self::new(start, start.advance(source), source)
    }
}

/// Simple expression node (directive argument, value or modifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleExpressionNode {
    pub content: String,
    pub is_static: bool,
    pub loc: SourceLocation,
}

impl SimpleExpressionNode {
    pub fn new(content: impl Into<String>, is_static: bool, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            is_static,
            loc,
        }
    }
}

/// A directive attribute such as `v-on:click.prevent="onTap"` or `@tap`.
///
/// For `v-on` this is the event binding handed to the transform: the event
/// name lives in `arg`, the handler in `exp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveNode {
    /// Normalized directive name without prefix (e.g. "on")
    pub name: String,
    /// Directive expression
    pub exp: Option<SimpleExpressionNode>,
    /// Directive argument (e.g. "click" in @click)
    pub arg: Option<SimpleExpressionNode>,
    /// Directive modifiers (e.g. ["stop", "prevent"] in @click.stop.prevent)
    pub modifiers: Vec<SimpleExpressionNode>,
    pub loc: SourceLocation,
}

impl DirectiveNode {
    pub fn new(name: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            exp: None,
            arg: None,
            modifiers: Vec::new(),
            loc,
        }
    }

    /// Shorthand for a `v-on` directive with a static event name.
    pub fn on(event: &str, loc: SourceLocation) -> Self {
        let mut dir = Self::new("on", loc);
        dir.arg = Some(SimpleExpressionNode::new(event, true, SourceLocation::STUB));
        dir
    }

    pub fn with_arg(mut self, arg: SimpleExpressionNode) -> Self {
        self.arg = Some(arg);
        self
    }

    pub fn with_exp(mut self, exp: SimpleExpressionNode) -> Self {
        self.exp = Some(exp);
        self
    }

    pub fn with_modifier(mut self, modifier: &str) -> Self {
        self.modifiers.push(SimpleExpressionNode::new(
            modifier,
            true,
            SourceLocation::STUB,
        ));
        self
    }

    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.content == name)
    }
}

/// Shape of a handler expression.
///
/// Produced by the compiler's classifier; the `v-on` transform decides how to
/// wrap a handler purely by matching on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerExpression {
    /// `foo`, `foo.bar`, `a['b' + c]`
    Reference(String),
    /// `e => foo(e)`, `function ($event) { ... }`
    FunctionLiteral(String),
    /// A single statement that is not a plain reference: `i++`, `foo($event)`
    InlineStatement(String),
    /// Several statements separated by `;` or newlines
    Statements(Vec<String>),
}

/// Runtime helpers referenced by mini-program render functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuntimeHelper {
    /// Marks a binding as an event handler
    VOn,
}

impl RuntimeHelper {
    /// Exported name in the runtime module
    pub fn name(&self) -> &'static str {
        match self {
            Self::VOn => "vOn",
        }
    }

    /// Local alias used in generated code
    pub fn alias(&self) -> &'static str {
        match self {
            Self::VOn => "_vOn",
        }
    }
}

/// Generated handler code, before the `_vOn(...)` adapter is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerCode {
    /// A callable reference passed as-is
    Reference(String),
    /// An inline statement (or block) wrapped as `$event => ...`
    Arrow(String),
    /// A function literal from the template, identifiers qualified
    FunctionLiteral(String),
    /// `() => {}` for modifier-only bindings
    Noop,
}

impl HandlerCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reference(code) | Self::Arrow(code) | Self::FunctionLiteral(code) => code,
            Self::Noop => "() => {}",
        }
    }
}

/// Codegen result of one event binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCodegenNode {
    /// Platform attribute name (`bindtap`, `catch:foo-bar`, ...)
    pub attr_name: String,
    /// Handler code without the adapter call
    pub handler: HandlerCode,
    /// Adapter every handler is wrapped with
    pub helper: RuntimeHelper,
    pub loc: SourceLocation,
}

impl EventCodegenNode {
    /// The handler wrapped with the runtime adapter, e.g. `_vOn(_ctx.onTap)`.
    pub fn value(&self) -> std::string::String {
        [self.helper.alias(), "(", self.handler.as_str(), ")"].concat()
    }
}
