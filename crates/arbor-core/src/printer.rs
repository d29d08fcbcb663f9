use crate::tree::{Tree, TreeKind};

/// Printer for `Tree` that reconstructs source-like text.
///
/// This is intended for debugging, snapshotting, and tooling. It is not a
/// faithful round-trip of the original source: the parser's whitespace is
/// gone, only block delimiters and separator text survive verbatim.
#[derive(Default)]
pub struct TreePrinter {
    buf: String,
}

impl TreePrinter {
    pub fn print(tree: &Tree) -> String {
        let mut printer = Self::default();
        printer.write(tree);
        printer.buf
    }

    pub fn write(&mut self, tree: &Tree) {
        match &tree.kind {
            TreeKind::Integer(value) => self.buf.push_str(&value.to_string()),
            TreeKind::Real(value) => self.buf.push_str(&value.to_string()),
            TreeKind::Name(text) => self.buf.push_str(text),
            TreeKind::Text(text) => self.buf.push_str(&format!("{:?}", text)),
            TreeKind::Prefix(prefix) => {
                self.write(&prefix.left);
                self.write(&prefix.right);
            }
            TreeKind::Postfix(postfix) => {
                self.write(&postfix.left);
                self.write(&postfix.right);
            }
            TreeKind::Infix(infix) => {
                self.write(&infix.left);
                if infix.is_separator() {
                    // Separator text carries its own spacing.
                    self.buf.push_str(&infix.name);
                } else {
                    self.buf.push(' ');
                    self.buf.push_str(&infix.name);
                    self.buf.push(' ');
                }
                self.write(&infix.right);
            }
            TreeKind::Block(block) => {
                self.buf.push_str(&block.opening);
                self.write(&block.child);
                self.buf.push_str(&block.closing);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_keep_their_delimiters() {
        let tree = Tree::block(
            Tree::infix("+", Tree::integer(1), Tree::name("x")),
            "(",
            ")",
        );
        assert_eq!(TreePrinter::print(&tree), "(1 + x)");
    }

    #[test]
    fn separators_print_verbatim() {
        let tree = Tree::infix(
            "\n",
            Tree::integer(1),
            Tree::infix(";", Tree::integer(2), Tree::integer(3)),
        );
        assert_eq!(TreePrinter::print(&tree), "1\n2;3");
    }

    #[test]
    fn text_leaves_are_quoted() {
        let tree = Tree::prefix(Tree::name("print"), Tree::text("a\"b"));
        assert_eq!(TreePrinter::print(&tree), "print\"a\\\"b\"");
    }
}
