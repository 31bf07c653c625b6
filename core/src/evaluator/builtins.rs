//! Builtin dispatch and the list operations.
//!
//! Every builtin takes its argument list by value. On success the arguments
//! are folded into the result; on failure they are dropped before the error
//! is returned.

use core::fmt;

use tracing::debug;

use crate::evaluator::{EvalError, Evaluator, operators};
use crate::values::{Value, take};

/// Integer arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A statically dispatched operation, selected by the leading symbol of an
/// S-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    Arithmetic(ArithmeticOp),
}

impl Builtin {
    pub const ALL: [Builtin; 9] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Arithmetic(ArithmeticOp::Add),
        Builtin::Arithmetic(ArithmeticOp::Sub),
        Builtin::Arithmetic(ArithmeticOp::Mul),
        Builtin::Arithmetic(ArithmeticOp::Div),
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Arithmetic(op) => op.symbol(),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply the builtin named `name` to `args`.
pub(super) fn apply(evaluator: &mut Evaluator, name: &str, args: Vec<Value>) -> Value {
    let Some(builtin) = Builtin::from_name(name) else {
        debug!(name, "unknown function");
        return Value::Error(EvalError::UnknownFunction {
            name: name.to_string(),
        });
    };

    debug!(%builtin, argc = args.len(), "applying builtin");
    let result = match builtin {
        Builtin::List => Ok(Value::QExpr(args)),
        Builtin::Head => head(args),
        Builtin::Tail => tail(args),
        Builtin::Join => join(args),
        Builtin::Eval => eval(evaluator, args),
        Builtin::Arithmetic(op) => operators::fold(op, args),
    };

    result.unwrap_or_else(Value::Error)
}

fn head(args: Vec<Value>) -> Result<Value, EvalError> {
    let cells = single_qexpr(Builtin::Head, args)?;
    ensure_non_empty(Builtin::Head, &cells)?;
    Ok(take(cells, 0))
}

fn tail(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut cells = single_qexpr(Builtin::Tail, args)?;
    ensure_non_empty(Builtin::Tail, &cells)?;
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

fn join(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        joined.extend(expect_qexpr(Builtin::Join, i + 1, arg)?);
    }
    Ok(Value::QExpr(joined))
}

/// Evaluates a quoted list as if it were an S-expression.
///
/// An S-expression is accepted as well: `head` can hand one back unevaluated,
/// as in `eval (head {(+ 1 2)})`.
fn eval(evaluator: &mut Evaluator, args: Vec<Value>) -> Result<Value, EvalError> {
    let [arg] = exactly_one(Builtin::Eval, args)?;
    match arg {
        Value::QExpr(cells) | Value::SExpr(cells) => Ok(evaluator.eval(Value::SExpr(cells))),
        other => Err(EvalError::WrongArgType {
            function: Builtin::Eval,
            index: 1,
            got: other.type_name(),
            expected: "Q-Expression",
        }),
    }
}

fn exactly_one(function: Builtin, args: Vec<Value>) -> Result<[Value; 1], EvalError> {
    <[Value; 1]>::try_from(args).map_err(|args| EvalError::WrongArgCount {
        function,
        got: args.len(),
        expected: 1,
    })
}

fn expect_qexpr(function: Builtin, index: usize, arg: Value) -> Result<Vec<Value>, EvalError> {
    match arg {
        Value::QExpr(cells) => Ok(cells),
        other => Err(EvalError::WrongArgType {
            function,
            index,
            got: other.type_name(),
            expected: "Q-Expression",
        }),
    }
}

fn single_qexpr(function: Builtin, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let [arg] = exactly_one(function, args)?;
    expect_qexpr(function, 1, arg)
}

/// `head` and `tail` need at least one element; a single-element list is fine.
fn ensure_non_empty(function: Builtin, cells: &[Value]) -> Result<(), EvalError> {
    if cells.is_empty() {
        return Err(EvalError::EmptyList { function });
    }
    Ok(())
}
