//! Core evaluation logic.

use tracing::{trace, warn};

use crate::evaluator::{EvalError, EvaluatorOptions, builtins};
use crate::values::{Value, take};

/// Recursive evaluator for Lispy values.
///
/// Holds nothing between top-level calls except its options; `depth` is only
/// non-zero while a call is in progress.
#[derive(Debug, Default)]
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Evaluate a value, consuming it.
    ///
    /// Only S-expressions are reduced; every other value comes back as is.
    pub fn eval(&mut self, value: Value) -> Value {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            warn!(max_depth = self.options.max_depth, "evaluation depth exceeded");
            return Value::Error(EvalError::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = match value {
            Value::SExpr(cells) => self.eval_sexpr(cells),
            other => other,
        };
        self.depth -= 1;

        result
    }

    fn eval_sexpr(&mut self, cells: Vec<Value>) -> Value {
        let mut cells: Vec<Value> = cells.into_iter().map(|cell| self.eval(cell)).collect();

        if let Some(index) = cells.iter().position(Value::is_error) {
            return take(cells, index);
        }

        match cells.len() {
            0 => return Value::SExpr(cells),
            1 => return take(cells, 0),
            _ => {}
        }

        let name = match cells.remove(0) {
            Value::Symbol(name) => name,
            other => {
                trace!(found = other.type_name(), "S-expression head is not a symbol");
                return Value::Error(EvalError::NotASymbolHead {
                    found: other.type_name(),
                });
            }
        };

        builtins::apply(self, &name, cells)
    }
}
