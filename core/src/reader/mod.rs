//! Converts a parse tree into a value tree.
//!
//! This is a structural transform only: nothing is evaluated and no builtin
//! names are looked up.

use tracing::trace;

use crate::evaluator::EvalError;
use crate::parser::{Node, Rule};
use crate::values::Value;


/// Read a parse tree node into a value.
///
/// The root of the tree and parenthesised groups become S-expressions, brace
/// groups become Q-expressions. Delimiter tokens and the end-of-input marker
/// are skipped.
pub fn read(node: &Node<'_>) -> Value {
    match node.rule {
        Rule::number => read_number(node.text),
        Rule::symbol => Value::symbol(node.text),
        Rule::lispy | Rule::sexpr => Value::SExpr(read_cells(node)),
        Rule::qexpr => Value::QExpr(read_cells(node)),
        rule => {
            trace!(?rule, text = node.text, "no value for syntax node");
            Value::Error(EvalError::UnexpectedSyntax { rule })
        }
    }
}

fn read_cells(node: &Node<'_>) -> Vec<Value> {
    node.expressions().map(read).collect()
}

/// Parse a base-10 integer literal, or produce an `invalid number` error if it
/// does not fit in an `i64`.
fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(err) => {
            trace!(text, %err, "number literal out of range");
            Value::Error(EvalError::InvalidNumber {
                text: text.to_string(),
            })
        }
    }
}
