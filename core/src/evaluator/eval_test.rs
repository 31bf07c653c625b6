//! Unit tests for the evaluator.

use super::*;
use crate::{parser, reader};
use pretty_assertions::assert_eq;

fn run(input: &str) -> Value {
    let tree = parser::parse(input).expect("parsing failed");
    eval(reader::read(&tree))
}

fn run_to_string(input: &str) -> String {
    run(input).to_string()
}

fn numbers(ns: &[i64]) -> Vec<Value> {
    ns.iter().copied().map(Value::Number).collect()
}

#[test]
fn test_self_evaluating_values() {
    assert_eq!(eval(Value::number(5)), Value::number(5));
    assert_eq!(eval(Value::symbol("head")), Value::symbol("head"));
    assert_eq!(
        eval(Value::error(EvalError::DivisionByZero)),
        Value::error(EvalError::DivisionByZero)
    );

    let quoted = Value::QExpr(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
    assert_eq!(eval(quoted.clone()), quoted);
}

#[test]
fn test_number_literals() {
    for n in [0, 1, -1, 42, -123, i64::MAX, i64::MIN] {
        assert_eq!(run(&n.to_string()), Value::number(n));
    }
}

#[test]
fn test_empty_sexpr() {
    assert_eq!(run("()"), Value::sexpr());
    assert_eq!(run_to_string("()"), "()");
    assert_eq!(run_to_string("(())"), "()");
}

#[test]
fn test_single_cell_is_unwrapped() {
    assert_eq!(run("(5)"), Value::number(5));
    assert_eq!(run("((((7))))"), Value::number(7));
    assert_eq!(run("(+)"), Value::symbol("+"));
    assert_eq!(run_to_string("{1 2}"), "{1 2}");
}

#[test]
fn test_arithmetic() {
    assert_eq!(run("+ 1 2 3"), Value::number(6));
    assert_eq!(run("- 5"), Value::number(-5));
    assert_eq!(run("* 2 (+ 1 2)"), Value::number(6));
    assert_eq!(run("(- 10 4 3)"), Value::number(3));
    assert_eq!(run("/ 7 2"), Value::number(3));
    assert_eq!(run("/ -7 2"), Value::number(-3));
    assert_eq!(run("+ 1 (* 2 3) (- 4 (/ 10 5))"), Value::number(9));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("/ 1 0"), Value::error(EvalError::DivisionByZero));
    assert_eq!(run("/ 10 2 0 5"), Value::error(EvalError::DivisionByZero));
    assert_eq!(run_to_string("/ 1 0"), "Error: Division by zero!");
}

#[test]
fn test_overflow_is_an_error() {
    assert_eq!(
        run("+ 9223372036854775807 1"),
        Value::error(EvalError::Overflow {
            op: ArithmeticOp::Add
        })
    );
    assert_eq!(
        run("- -9223372036854775808"),
        Value::error(EvalError::Overflow {
            op: ArithmeticOp::Sub
        })
    );
    assert_eq!(
        run("/ -9223372036854775808 -1"),
        Value::error(EvalError::Overflow {
            op: ArithmeticOp::Div
        })
    );
}

#[test]
fn test_invalid_number_literal() {
    assert_eq!(
        run("99999999999999999999"),
        Value::error(EvalError::InvalidNumber {
            text: "99999999999999999999".to_string()
        })
    );
    assert_eq!(run_to_string("+ 1 99999999999999999999"), "Error: invalid number");
}

#[test]
fn test_non_number_operand() {
    assert_eq!(
        run("+ 1 {2}"),
        Value::error(EvalError::NonNumberOperand {
            op: ArithmeticOp::Add,
            got: "Q-Expression"
        })
    );
    assert_eq!(run_to_string("* 2 head"), "Error: Cannot operate on a non-number!");
}

#[test]
fn test_head_tail_join() {
    assert_eq!(run("head {a b c}"), Value::symbol("a"));
    assert_eq!(run_to_string("tail {a b c}"), "{b c}");
    assert_eq!(run_to_string("join {1 2} {3}"), "{1 2 3}");
    assert_eq!(run_to_string("join {1} {} {2 {3}} {4}"), "{1 2 {3} 4}");
    assert_eq!(run_to_string("head {(+ 1 2) 4}"), "(+ 1 2)");
}

#[test]
fn test_head_of_empty_list() {
    assert_eq!(
        run("head {}"),
        Value::error(EvalError::EmptyList {
            function: Builtin::Head
        })
    );
    assert_eq!(
        run("tail {}"),
        Value::error(EvalError::EmptyList {
            function: Builtin::Tail
        })
    );
    assert_eq!(run_to_string("head {}"), "Error: Function 'head' passed {}!");
}

#[test]
fn test_head_tail_single_element_list() {
    assert_eq!(run("head {1}"), Value::number(1));
    assert_eq!(run("tail {1}"), Value::qexpr());
}

#[test]
fn test_head_of_non_list() {
    assert!(matches!(
        run("head 1"),
        Value::Error(EvalError::WrongArgType {
            function: Builtin::Head,
            ..
        })
    ));
    assert!(matches!(
        run("tail (list 1) {2}"),
        Value::Error(EvalError::WrongArgCount {
            function: Builtin::Tail,
            got: 2,
            ..
        })
    ));
}

#[test]
fn test_list_and_eval() {
    assert_eq!(run_to_string("list 1 2 3"), "{1 2 3}");
    assert_eq!(run_to_string("list (+ 1 2) {x}"), "{3 {x}}");
    assert_eq!(run("eval {+ 1 2}"), Value::number(3));
    assert_eq!(run_to_string("eval (tail {tail tail {5 6 7}})"), "{6 7}");
    assert_eq!(run("eval {}"), Value::sexpr());
}

#[test]
fn test_eval_of_head_of_expressions() {
    assert_eq!(run("eval (head {(+ 1 2) (+ 10 20)})"), Value::number(3));
}

#[test]
fn test_eval_of_list_is_identity() {
    for input in ["(+ 1 2)", "(* 3 (- 10 4))", "(head {1 2})", "(tail {1 2 3})"] {
        let cells = &input[1..input.len() - 1];
        let wrapped = format!("eval (list {})", cells);
        assert_eq!(run(&wrapped), run(input), "input: {}", input);
    }
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        run("foo 1 2"),
        Value::error(EvalError::UnknownFunction {
            name: "foo".to_string()
        })
    );
    assert_eq!(run_to_string("(bar)"), "bar");
}

#[test]
fn test_head_must_be_symbol() {
    assert_eq!(
        run("1 2 3"),
        Value::error(EvalError::NotASymbolHead { found: "Number" })
    );
    assert_eq!(
        run_to_string("{+} 1 2"),
        "Error: S-expression does not start with symbol!"
    );
}

#[test]
fn test_error_short_circuits() {
    // The first error in the cells wins, even if a later cell also fails
    assert_eq!(
        run("+ (/ 1 0) (foo 1)"),
        Value::error(EvalError::DivisionByZero)
    );
    assert_eq!(
        run("(head {}) (/ 1 0)"),
        Value::error(EvalError::EmptyList {
            function: Builtin::Head
        })
    );
    // An error nested deep inside propagates to the top unchanged
    assert_eq!(
        run("+ 1 (* 2 (- 3 (/ 4 0)))"),
        Value::error(EvalError::DivisionByZero)
    );
}

#[test]
fn test_errors_inside_quotes_are_inert() {
    assert_eq!(run_to_string("list {(/ 1 0)}"), "{{(/ 1 0)}}");
    assert_eq!(run("eval {/ 1 0}"), Value::error(EvalError::DivisionByZero));
}

#[test]
fn test_depth_limit() {
    let deep = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(run(&deep), Value::number(1));

    let tree = parser::parse(&deep).unwrap();
    assert_eq!(
        eval_with_limits(reader::read(&tree), 10),
        Value::error(EvalError::DepthExceeded { max_depth: 10 })
    );
}

#[test]
fn test_depth_resets_between_calls() {
    let mut evaluator = Evaluator::new(EvaluatorOptions { max_depth: 3 });
    let expr = || Value::SExpr(vec![Value::SExpr(numbers(&[1]))]);
    assert_eq!(evaluator.eval(expr()), Value::number(1));
    assert_eq!(evaluator.eval(expr()), Value::number(1));
}

#[test]
fn test_direct_value_construction() {
    crate::test_utils::init_test_logging();

    let mut args = Value::sexpr();
    args.append(Value::symbol("join")).unwrap();
    args.append(Value::QExpr(numbers(&[1, 2]))).unwrap();
    args.append(Value::QExpr(numbers(&[3]))).unwrap();
    assert_eq!(eval(args), Value::QExpr(numbers(&[1, 2, 3])));
}
