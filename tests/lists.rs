mod cases;

test_case!(
    list_builds_qexpr,
    input: "list 1 2 3 4",
    output: "{1 2 3 4}",
);

test_case!(
    list_evaluates_its_arguments,
    input: "list (+ 1 2) (- 5)",
    output: "{3 -5}",
);

test_case!(
    head_returns_first_element,
    input: "head {a b c}",
    output: "a",
);

test_case!(
    tail_drops_first_element,
    input: "tail {a b c}",
    output: "{b c}",
);

test_case!(
    head_of_single_element,
    input: "head {x}",
    output: "x",
);

test_case!(
    tail_of_single_element,
    input: "tail {x}",
    output: "{}",
);

test_case!(
    join_concatenates,
    input: "join {1 2} {3}",
    output: "{1 2 3}",
);

test_case!(
    join_many,
    input: "join {a} {} {b c} (list d)",
    output: "{a b c d}",
);

test_case!(
    eval_quoted_expression,
    input: "eval {* 6 7}",
    output: "42",
);

test_case!(
    eval_head_of_expressions,
    input: "eval (head {(+ 1 2) (+ 10 20)})",
    output: "3",
);

test_case!(
    eval_list_round_trip,
    input: "eval (list + 1 (* 2 3))",
    output: "7",
);

test_case!(
    eval_tail_of_code,
    input: "eval (tail {tail tail {5 6 7}})",
    output: "{6 7}",
);

test_case!(
    qexpr_is_not_evaluated,
    input: "{+ 1 (/ 1 0)}",
    output: "{+ 1 (/ 1 0)}",
);

test_case!(
    empty_sexpr,
    input: "()",
    output: "()",
);

test_case!(
    empty_qexpr,
    input: "{}",
    output: "{}",
);
