pub mod error;
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::LispyParser;
pub use parser::Rule;
pub use parser::parse;

pub use error::{ParseError, ParseErrorKind};
pub use syntax::{Node, Span};
