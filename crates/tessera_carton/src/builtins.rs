//! Built-in identifiers that the template compiler never rewrites.
//!
//! Uses compile-time perfect hash sets (phf) for O(1) lookup with zero
//! runtime initialization cost.

use phf::phf_set;

/// JavaScript globals reachable from template expressions.
static GLOBAL_ALLOWLIST_SET: phf::Set<&'static str> = phf_set! {
    "Infinity",
    "undefined",
    "NaN",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "Math",
    "Number",
    "Date",
    "Array",
    "Object",
    "Boolean",
    "String",
    "RegExp",
    "Map",
    "Set",
    "JSON",
    "Intl",
    "BigInt",
    "console",
    "Error",
    "Symbol",
    "arguments",
};

/// Locals of the generated render function.
static RENDER_LOCALS_SET: phf::Set<&'static str> = phf_set! {
    "_ctx",
    "_cache",
    "$event",
};

/// Name of the implicit event argument of a wrapped inline handler.
pub const EVENT_ARG: &str = "$event";

/// Whether `name` is a JavaScript global allowed in templates.
pub fn is_global_allowed(name: &str) -> bool {
    GLOBAL_ALLOWLIST_SET.contains(name)
}

/// Whether `name` is bound by the render function itself.
pub fn is_render_local(name: &str) -> bool {
    RENDER_LOCALS_SET.contains(name)
}
