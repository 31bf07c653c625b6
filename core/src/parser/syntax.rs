// Syntax structures shared by the parser and the tree reader.

use core::{fmt, ops::Range};

use crate::parser::Rule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// A node of the generic parse tree: the grammar rule that matched, the
/// literal text it covers, and its children in source order.
///
/// Delimiter tokens and the `EOI` marker are kept as ordinary children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    pub rule: Rule,
    pub text: &'a str,
    pub span: Span,
    pub children: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    /// Bracket tokens: `(`, `)`, `{`, `}`.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self.rule,
            Rule::open_paren | Rule::close_paren | Rule::open_brace | Rule::close_brace
        )
    }

    /// Match metadata that carries no expression (the end-of-input marker).
    pub fn is_metadata(&self) -> bool {
        self.rule == Rule::EOI
    }

    /// Children that are expressions, i.e. neither delimiters nor metadata.
    pub fn expressions(&self) -> impl Iterator<Item = &Node<'a>> {
        self.children
            .iter()
            .filter(|child| !child.is_delimiter() && !child.is_metadata())
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}{:?}", "", self.rule, indent = indent * 2)?;
        if self.children.is_empty() {
            write!(f, " {:?}", self.text)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_indented(f, indent + 1)?;
        }
        Ok(())
    }
}

/// Renders the tree one node per line, children indented under their parent.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
