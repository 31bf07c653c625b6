//! Public API for the Lispy interpreter.
//!
//! The [`Lispy`] engine wires the parser, the tree reader and the evaluator
//! together for one read-evaluate-print cycle.
//!
//! # Example
//!
//! ```
//! use lispy_core::api::Lispy;
//!
//! let lispy = Lispy::default();
//! let value = lispy.run("eval (head {(+ 1 2) (+ 10 20)})").unwrap();
//! assert_eq!(value.to_string(), "3");
//! ```

pub mod engine;
pub mod error;

pub use engine::Lispy;
pub use error::{Diagnostic, Error, Severity};
