//! Evaluation errors.
//!
//! None of these abort evaluation: each one is wrapped in `Value::Error` at
//! the point of detection and short-circuits the expression that contains it.

use thiserror::Error;

use crate::evaluator::{ArithmeticOp, Builtin};
use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Numeric literal outside the `i64` range.
    #[error("invalid number")]
    InvalidNumber { text: String },

    /// The first element of an evaluated S-expression is not a symbol.
    #[error("S-expression does not start with symbol!")]
    NotASymbolHead { found: &'static str },

    /// The leading symbol does not name a builtin.
    #[error("Unknown Function!")]
    UnknownFunction { name: String },

    #[error("Function '{function}' passed incorrect number of arguments! Got {got}, expected {expected}.")]
    WrongArgCount {
        function: Builtin,
        got: usize,
        expected: usize,
    },

    #[error("Function '{function}' passed incorrect type for argument {index}! Got {got}, expected {expected}.")]
    WrongArgType {
        function: Builtin,
        /// 1-based position of the offending argument.
        index: usize,
        got: &'static str,
        expected: &'static str,
    },

    /// An arithmetic operand is not a number.
    #[error("Cannot operate on a non-number!")]
    NonNumberOperand { op: ArithmeticOp, got: &'static str },

    #[error("Function '{function}' passed {{}}!")]
    EmptyList { function: Builtin },

    #[error("Division by zero!")]
    DivisionByZero,

    #[error("Integer overflow in '{op}'!")]
    Overflow { op: ArithmeticOp },

    /// A parse tree node the reader has no value for (a bare delimiter, say).
    #[error("unexpected syntax node {rule:?}")]
    UnexpectedSyntax { rule: Rule },

    /// Evaluation nested deeper than `EvaluatorOptions::max_depth`.
    #[error("Evaluation stack overflow: depth exceeds maximum of {max_depth}")]
    DepthExceeded { max_depth: usize },
}
