//! Tree-walking evaluator for Lispy values.
//!
//! The evaluator reduces S-expressions: it evaluates every cell, returns the
//! first error it finds, and otherwise applies the leading symbol as a builtin
//! to the remaining cells. Everything else evaluates to itself.
//!
//! ## Design Principles
//!
//! - **Never panic**: Errors are values (`Value::Error`), produced where they
//!   are detected and propagated unchanged
//! - **Stack-safe**: Depth tracking bounds recursion on deeply nested input
//! - **Owned values**: Every call consumes its input; nothing is shared
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator, values::Value};
//!
//! let expr = Value::SExpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
//! assert_eq!(evaluator::eval(expr), Value::number(3));
//! ```

mod builtins;
mod error;
mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use builtins::{ArithmeticOp, Builtin};
pub use error::EvalError;
pub use eval::Evaluator;

use crate::values::Value;

/// Options that control evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Evaluate a value with default limits.
pub fn eval(value: Value) -> Value {
    Evaluator::default().eval(value)
}

/// Evaluate a value with a custom depth limit.
pub fn eval_with_limits(value: Value, max_depth: usize) -> Value {
    Evaluator::new(EvaluatorOptions { max_depth }).eval(value)
}
