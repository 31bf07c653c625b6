//! The Lispy engine.

use super::Error;
use crate::evaluator::{Evaluator, EvaluatorOptions};
use crate::parser::{self, Node};
use crate::reader;
use crate::values::Value;

/// Runs source text through parse, read and evaluate.
///
/// The engine holds no state between calls besides its options: every call
/// builds a fresh value tree that is consumed by the time the call returns.
#[derive(Debug, Clone, Default)]
pub struct Lispy {
    options: EvaluatorOptions,
}

impl Lispy {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Parse `source` into the generic parse tree.
    pub fn parse<'s>(&self, source: &'s str) -> Result<Node<'s>, Error> {
        Ok(parser::parse(source)?)
    }

    /// Parse `source` and read it into an (unevaluated) value.
    ///
    /// The whole line becomes one S-expression, so `+ 1 2` and `(+ 1 2)`
    /// evaluate to the same result.
    pub fn read(&self, source: &str) -> Result<Value, Error> {
        let tree = self.parse(source)?;
        Ok(reader::read(&tree))
    }

    /// Evaluate an already-read value.
    pub fn eval(&self, value: Value) -> Value {
        Evaluator::new(self.options.clone()).eval(value)
    }

    /// Parse, read and evaluate `source`.
    ///
    /// Evaluation failures come back as `Ok(Value::Error(..))`; `Err` means
    /// the source did not parse.
    pub fn run(&self, source: &str) -> Result<Value, Error> {
        let value = self.read(source)?;
        Ok(self.eval(value))
    }
}
