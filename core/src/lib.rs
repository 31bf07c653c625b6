//! Core of the Lispy interpreter: grammar, tree reader, value model and evaluator.
//!
//! One read-evaluate-print cycle looks like this:
//!
//! ```
//! use lispy_core::{evaluator::Evaluator, parser, reader};
//!
//! let tree = parser::parse("+ 1 (* 2 3)").unwrap();
//! let value = reader::read(&tree);
//! let result = Evaluator::default().eval(value);
//! assert_eq!(result.to_string(), "7");
//! ```

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod values;
