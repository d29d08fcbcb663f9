use crate::printer::TreePrinter;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type BTree = Box<Tree>;

/// Infix operator names that denote sequential statement composition
/// rather than a value-producing binary operation.
pub const SEPARATOR_NEWLINE: &str = "\n";
pub const SEPARATOR_SEMICOLON: &str = ";";

/// Whether `name` is a statement separator.
pub fn is_separator(name: &str) -> bool {
    name == SEPARATOR_NEWLINE || name == SEPARATOR_SEMICOLON
}

/// A parsed expression/statement node.
///
/// Operator identity is literal text, not an enumerated code, because
/// arbitrary user-defined operators are legal. Every node exclusively owns
/// its children; there is no sharing between trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default, skip_serializing_if = "Span::is_null")]
    pub span: Span,
    #[serde(flatten)]
    pub kind: TreeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeKind {
    Integer(i64),
    Real(f64),
    Name(String),
    Text(String),
    Prefix(TreePrefix),
    Postfix(TreePostfix),
    Infix(TreeInfix),
    Block(TreeBlock),
}

/// Application of `left` to `right` with the operator leading the operand,
/// e.g. unary minus or a function-call head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePrefix {
    pub left: BTree,
    pub right: BTree,
}

/// Mirrors `TreePrefix` with the operator trailing the operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreePostfix {
    pub left: BTree,
    pub right: BTree,
}

/// Binary operator node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeInfix {
    pub name: String,
    pub left: BTree,
    pub right: BTree,
}

impl TreeInfix {
    pub fn is_separator(&self) -> bool {
        is_separator(&self.name)
    }
}

/// A parenthesized/bracketed/indented sub-tree. Delimiters are kept
/// verbatim so a printed tree round-trips its brackets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeBlock {
    pub child: BTree,
    pub opening: String,
    pub closing: String,
}

impl Tree {
    pub fn new(kind: TreeKind) -> Self {
        Self {
            span: Span::null(),
            kind,
        }
    }

    pub fn integer(value: i64) -> Self {
        TreeKind::Integer(value).into()
    }

    pub fn real(value: f64) -> Self {
        TreeKind::Real(value).into()
    }

    pub fn name(text: impl Into<String>) -> Self {
        TreeKind::Name(text.into()).into()
    }

    pub fn text(text: impl Into<String>) -> Self {
        TreeKind::Text(text.into()).into()
    }

    pub fn prefix(left: impl Into<BTree>, right: impl Into<BTree>) -> Self {
        TreeKind::Prefix(TreePrefix {
            left: left.into(),
            right: right.into(),
        })
        .into()
    }

    pub fn postfix(left: impl Into<BTree>, right: impl Into<BTree>) -> Self {
        TreeKind::Postfix(TreePostfix {
            left: left.into(),
            right: right.into(),
        })
        .into()
    }

    pub fn infix(name: impl Into<String>, left: impl Into<BTree>, right: impl Into<BTree>) -> Self {
        TreeKind::Infix(TreeInfix {
            name: name.into(),
            left: left.into(),
            right: right.into(),
        })
        .into()
    }

    pub fn block(
        child: impl Into<BTree>,
        opening: impl Into<String>,
        closing: impl Into<String>,
    ) -> Self {
        TreeKind::Block(TreeBlock {
            child: child.into(),
            opening: opening.into(),
            closing: closing.into(),
        })
        .into()
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn kind(&self) -> &TreeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            TreeKind::Integer(_) | TreeKind::Real(_) | TreeKind::Name(_) | TreeKind::Text(_)
        )
    }

    /// Whether this node joins two statements with `\n` or `;`.
    pub fn is_separator_infix(&self) -> bool {
        matches!(&self.kind, TreeKind::Infix(infix) if infix.is_separator())
    }

    pub fn as_name(&self) -> Option<&str> {
        match &self.kind {
            TreeKind::Name(text) => Some(text),
            _ => None,
        }
    }

    /// Statements of a separator chain in source order, walking the right
    /// spine. A node that is not a separator infix is a single statement.
    pub fn statements(&self) -> Statements<'_> {
        Statements { next: Some(self) }
    }

    pub fn statement_count(&self) -> usize {
        self.statements().count()
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&TreePrinter::print(self))
    }
}

impl From<TreeKind> for Tree {
    fn from(kind: TreeKind) -> Self {
        Tree::new(kind)
    }
}

/// Iterator over the statements of a separator chain, produced by
/// [`Tree::statements`].
pub struct Statements<'a> {
    next: Option<&'a Tree>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<&'a Tree> {
        let node = self.next.take()?;
        match &node.kind {
            TreeKind::Infix(infix) if infix.is_separator() => {
                self.next = Some(&infix.right);
                Some(&infix.left)
            }
            _ => Some(node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_default_to_null_span() {
        assert!(Tree::integer(1).span.is_null());
        assert!(Tree::name("x").span.is_null());
        let positioned = Tree::real(2.5).with_span(Span::new(1, 3, 6));
        assert_eq!(positioned.span, Span::new(1, 3, 6));
    }

    #[test]
    fn separator_classification() {
        assert!(is_separator("\n"));
        assert!(is_separator(";"));
        assert!(!is_separator("+"));

        let chain = Tree::infix(";", Tree::integer(1), Tree::integer(2));
        assert!(chain.is_separator_infix());
        let sum = Tree::infix("+", Tree::integer(1), Tree::integer(2));
        assert!(!sum.is_separator_infix());
        assert!(!sum.is_leaf());
        assert!(Tree::text("hi").is_leaf());
        assert_eq!(Tree::name("-").as_name(), Some("-"));
    }

    #[test]
    fn statements_walk_the_right_spine() {
        let chain = Tree::infix(
            ";",
            Tree::integer(1),
            Tree::infix("\n", Tree::integer(2), Tree::integer(3)),
        );
        let got: Vec<String> = chain.statements().map(|stmt| stmt.to_string()).collect();
        assert_eq!(got, ["1", "2", "3"]);
        assert_eq!(chain.statement_count(), 3);
        assert_eq!(Tree::name("x").statement_count(), 1);
    }
}
