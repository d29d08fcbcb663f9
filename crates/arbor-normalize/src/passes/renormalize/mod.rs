use arbor_core::span::Span;
use arbor_core::tree::{BTree, Tree, TreeInfix, TreeKind};

use crate::reselect::Reselect;


/// Rewrite a parsed tree into canonical form so that downstream editing
/// logic can compare and update it structurally.
///
/// Two rewrites apply, everything else passes through with children
/// renormalized:
/// - chained statement separators (`\n`, `;`) are re-associated into a
///   single right-leaning chain, so appending a statement only ever
///   touches the rightmost slot;
/// - unary minus applied directly to a numeric literal is folded into the
///   literal value.
///
/// The input tree is never mutated; the result is built from fresh nodes,
/// each carrying the position of the node it replaces.
pub fn renormalize(tree: &Tree) -> Tree {
    renormalize_with(tree, None)
}

/// Like [`renormalize`], threading a [`Reselect`] hook through every
/// construction site so callers can follow nodes across the rewrite.
pub fn renormalize_with(tree: &Tree, reselect: Option<&dyn Reselect>) -> Tree {
    renormalize_tree(tree, reselect)
}

fn emit(old: &Tree, new: Tree, reselect: Option<&dyn Reselect>) -> Tree {
    match reselect {
        Some(hook) => hook.reselect(old, new),
        None => new,
    }
}

fn renormalize_tree(tree: &Tree, reselect: Option<&dyn Reselect>) -> Tree {
    let new = match &tree.kind {
        TreeKind::Integer(value) => Tree::integer(*value).with_span(tree.span),
        TreeKind::Real(value) => Tree::real(*value).with_span(tree.span),
        TreeKind::Name(text) => Tree::name(text.clone()).with_span(tree.span),
        TreeKind::Text(text) => Tree::text(text.clone()).with_span(tree.span),
        TreeKind::Prefix(prefix) => {
            if let Some(folded) = fold_negated_literal(tree, prefix.left.as_ref(), &prefix.right) {
                folded
            } else {
                Tree::prefix(
                    renormalize_tree(&prefix.left, reselect),
                    renormalize_tree(&prefix.right, reselect),
                )
                .with_span(tree.span)
            }
        }
        TreeKind::Postfix(postfix) => Tree::postfix(
            renormalize_tree(&postfix.left, reselect),
            renormalize_tree(&postfix.right, reselect),
        )
        .with_span(tree.span),
        TreeKind::Infix(infix) => return renormalize_infix(tree, infix, reselect),
        TreeKind::Block(block) => Tree::block(
            renormalize_tree(&block.child, reselect),
            block.opening.clone(),
            block.closing.clone(),
        )
        .with_span(tree.span),
    };
    emit(tree, new, reselect)
}

/// `- <numeric literal>` becomes the negated literal, positioned at the
/// enclosing prefix node. The check is on the immediate children only: a
/// literal wrapped in a block, or any non-literal operand, falls through
/// to the generic prefix case.
fn fold_negated_literal(tree: &Tree, operator: &Tree, operand: &Tree) -> Option<Tree> {
    if operator.as_name() != Some("-") {
        return None;
    }
    match operand.kind {
        TreeKind::Integer(value) => Some(Tree::integer(value.wrapping_neg()).with_span(tree.span)),
        TreeKind::Real(value) => Some(Tree::real(-value).with_span(tree.span)),
        _ => None,
    }
}

fn renormalize_infix(tree: &Tree, infix: &TreeInfix, reselect: Option<&dyn Reselect>) -> Tree {
    // Bottom-up: both children are in normal form before this node's
    // rewrite is attempted.
    let left = renormalize_tree(&infix.left, reselect);
    let right = renormalize_tree(&infix.right, reselect);

    // The chain rewrite fires when this node is a separator and the
    // normalized left child is a separator chain of either kind. A `;`
    // chain under a `\n` node interleaves into one combined chain.
    if infix.is_separator() && left.is_separator_infix() {
        return relink_chain(tree, &infix.name, left, right, reselect);
    }

    emit(
        tree,
        Tree::infix(infix.name.clone(), left, right).with_span(tree.span),
        reselect,
    )
}

/// Append `stmt` to the already-normalized separator chain `left`.
///
/// The chain's top two statements become the new top node, and the final
/// statement is joined to `stmt` by a fresh separator node; both new nodes
/// take the current node's name and position, while the chain's interior
/// links keep theirs. The spine walk is an explicit unzip/zip: chain
/// length never adds recursion depth.
fn relink_chain(
    tree: &Tree,
    name: &str,
    left: Tree,
    stmt: Tree,
    reselect: Option<&dyn Reselect>,
) -> Tree {
    let TreeKind::Infix(chain) = left.kind else {
        unreachable!("relink requires a separator chain on the left");
    };
    let TreeInfix {
        left: first,
        right: rest,
        ..
    } = chain;

    // Unzip the right spine down to the last statement of the chain.
    let mut frames: Vec<(Span, String, BTree)> = Vec::new();
    let mut cursor = *rest;
    while cursor.is_separator_infix() {
        let span = cursor.span;
        let TreeKind::Infix(link) = cursor.kind else {
            unreachable!("separator infix checked above");
        };
        frames.push((span, link.name, link.left));
        cursor = *link.right;
    }
    tracing::debug!(
        "relinking separator chain at {} ({} spine links)",
        tree.span,
        frames.len()
    );

    // `cursor` is the final statement; join it to the appended one, then
    // zip the spine back on top.
    let mut rebuilt = emit(
        tree,
        Tree::infix(name, cursor, stmt).with_span(tree.span),
        reselect,
    );
    while let Some((span, link_name, link_left)) = frames.pop() {
        rebuilt = Tree::infix(link_name, link_left, rebuilt).with_span(span);
    }
    emit(
        tree,
        Tree::infix(name, first, rebuilt).with_span(tree.span),
        reselect,
    )
}
