//! Lispy - a small Lisp with S-expressions and quoted Q-expressions
//!
//! # Overview
//!
//! Each input line is parsed, read into a value tree and evaluated. The
//! language has integers, symbols, S-expressions `( ... )` that are evaluated,
//! and Q-expressions `{ ... }` that are kept as data. The builtins are `list`,
//! `head`, `tail`, `join`, `eval` and the arithmetic operators `+ - * /`.
//!
//! # Quick Start
//!
//! ```
//! use lispy::Lispy;
//!
//! let lispy = Lispy::default();
//! let value = lispy.run("join {1 2} (list (* 3 (+ 1 1)))").unwrap();
//! assert_eq!(value.to_string(), "{1 2 6}");
//! ```
//!
//! Evaluation errors are values, so they print like any other result:
//!
//! ```
//! use lispy::Lispy;
//!
//! let value = Lispy::default().run("/ 10 0").unwrap();
//! assert_eq!(value.to_string(), "Error: Division by zero!");
//! ```

pub mod error_renderer;

// Re-export public API from lispy_core
pub use lispy_core::api::{Diagnostic, Error, Lispy, Severity};

// Re-export commonly used types and values
pub use lispy_core::evaluator::{ArithmeticOp, Builtin, EvalError, Evaluator, EvaluatorOptions};
pub use lispy_core::parser::{self, Node, Rule};
pub use lispy_core::reader;
pub use lispy_core::values::{self, Value};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
