//! Mini-program transforms.

pub mod transform_expression;
pub mod v_on;

pub use transform_expression::{
    classify_handler, collapse_function_literal, prefix_identifiers, process_expression,
};
pub use v_on::{parse_event_modifiers, process_v_on, transform_event_binding, EventModifiers};
