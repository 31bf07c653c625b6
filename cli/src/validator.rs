use reedline::{ValidationResult, Validator};

use crate::lexer::calculate_depth;

/// Keeps the editor open while brackets are unbalanced, so an expression can
/// span several lines.
pub struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
