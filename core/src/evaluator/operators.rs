//! Integer arithmetic for `+ - * /`.

use crate::evaluator::{ArithmeticOp, Builtin, EvalError};
use crate::values::Value;

/// Fold `args` left to right with `op`, starting from the first argument.
///
/// `-` with a single argument negates it. All arguments are checked to be
/// numbers before any arithmetic happens.
pub(super) fn fold(op: ArithmeticOp, args: Vec<Value>) -> Result<Value, EvalError> {
    let operands = args
        .into_iter()
        .map(|arg| match arg {
            Value::Number(n) => Ok(n),
            other => Err(EvalError::NonNumberOperand {
                op,
                got: other.type_name(),
            }),
        })
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let mut operands = operands.into_iter();
    let Some(first) = operands.next() else {
        return Err(EvalError::WrongArgCount {
            function: Builtin::Arithmetic(op),
            got: 0,
            expected: 1,
        });
    };

    if op == ArithmeticOp::Sub && operands.len() == 0 {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or(EvalError::Overflow { op });
    }

    operands
        .try_fold(first, |acc, rhs| eval_binary_int(op, acc, rhs))
        .map(Value::Number)
}

/// Evaluate a binary operation on two integers.
///
/// Overflow is an error rather than wrapping. Division truncates toward zero.
pub(super) fn eval_binary_int(op: ArithmeticOp, left: i64, right: i64) -> Result<i64, EvalError> {
    let result = match op {
        ArithmeticOp::Add => left.checked_add(right),
        ArithmeticOp::Sub => left.checked_sub(right),
        ArithmeticOp::Mul => left.checked_mul(right),
        ArithmeticOp::Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            // Only i64::MIN / -1 fails here
            left.checked_div(right)
        }
    };
    result.ok_or(EvalError::Overflow { op })
}
