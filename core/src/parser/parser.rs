use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::{Node, Span};

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse a line of source text into a generic parse tree.
///
/// The returned root is always a `Rule::lispy` node whose children are the
/// top-level expressions followed by the `EOI` marker.
pub fn parse(source: &str) -> Result<Node<'_>, ParseError> {
    let mut pairs =
        LispyParser::parse(Rule::lispy, source).map_err(|e| convert_pest_error(e, source))?;

    let root = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "parser produced no output".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    Ok(build_node(root))
}

fn build_node(pair: Pair<'_, Rule>) -> Node<'_> {
    let rule = pair.as_rule();
    let text = pair.as_str();
    let span = Span::from(pair.as_span());
    let children = pair.into_inner().map(build_node).collect();
    Node {
        rule,
        text,
        span,
        children,
    }
}
