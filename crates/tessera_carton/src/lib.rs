//! Carton - The artist's toolbox for Tessera.
//!
//! Small shared utilities used by both the template compiler and the
//! app-shell runtime: string and hash-map aliases, short binding names and
//! the identifiers the compiler never rewrites.
//!
//! # Example
//!
//! ```
//! use tessera_carton::{binding_name, is_global_allowed, is_render_local};
//!
//! assert_eq!(binding_name(26).as_str(), "aa");
//! assert!(is_global_allowed("Math"));
//! assert!(is_render_local("$event"));
//! ```

pub mod builtins;
pub mod general;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString as String;

// Re-export rustc-hash for fast hash maps
pub use rustc_hash::FxHashMap;

// Re-export shared utilities
pub use builtins::*;
pub use general::*;
