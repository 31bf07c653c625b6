//! Shared helpers for end-to-end tests: source text in, printed value out.

use lispy::Lispy;

/// Run `input` through parse, read and evaluate, and print the result the way
/// the REPL does.
pub fn run(input: &str) -> String {
    match Lispy::default().run(input) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("Failed to parse '{}': {}", input, e),
    }
}

/// Declares one end-to-end test.
///
/// ```ignore
/// test_case!(
///     sum,
///     input: "+ 1 2",
///     output: "3",
/// );
/// ```
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, output: $output:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::run($input), $output, "input: {}", $input);
        }
    };
    ($name:ident, input: $input:expr, parse_error $(,)?) => {
        #[test]
        fn $name() {
            let result = lispy::Lispy::default().run($input);
            assert!(
                matches!(result, Err(lispy::Error::Parse { .. })),
                "expected a parse error for '{}', got {:?}",
                $input,
                result
            );
        }
    };
}
