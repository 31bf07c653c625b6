use core::fmt;

use crate::evaluator::EvalError;

/// A Lispy value.
///
/// Containers own their cells outright: there is no sharing between values,
/// and dropping a container drops everything inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    /// A failure; once it shows up inside a container being evaluated it
    /// replaces the whole container.
    Error(EvalError),
    /// A name. Only meaningful as the head of an S-expression.
    Symbol(String),
    /// An expression to be evaluated.
    SExpr(Vec<Value>),
    /// A quoted list; never evaluated on its own.
    QExpr(Vec<Value>),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// An empty S-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(Vec::new())
    }

    /// An empty Q-expression.
    pub fn qexpr() -> Self {
        Value::QExpr(Vec::new())
    }

    /// Moves `value` to the end of this container.
    ///
    /// Atoms have no cells; for them the value is handed back as `Err`.
    pub fn append(&mut self, value: Value) -> Result<(), Value> {
        match self.cells_mut() {
            Some(cells) => {
                cells.push(value);
                Ok(())
            }
            None => Err(value),
        }
    }

    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn cells_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Human-readable name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
        }
    }
}

/// Removes the cell at `index` and drops the rest of the container with it.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn take(mut cells: Vec<Value>, index: usize) -> Value {
    cells.swap_remove(index)
}

fn fmt_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(err) => write!(f, "Error: {}", err),
            Value::Symbol(name) => f.write_str(name),
            Value::SExpr(cells) => fmt_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => fmt_cells(f, '{', cells, '}'),
        }
    }
}
