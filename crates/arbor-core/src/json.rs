//! Helpers for serializing/deserializing tree snapshots.
//!
//! These utilities provide a thin wrapper over `serde_json` so editor
//! tooling can persist a tree between sessions and reload it later.

use crate::tree::Tree;
use crate::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a `Tree` from a JSON file on disk.
pub fn load_tree_from_file(path: &Path) -> Result<Tree> {
    let contents = fs::read_to_string(path)?;
    load_tree_from_str(&contents)
}

/// Load a `Tree` directly from a string slice containing JSON.
pub fn load_tree_from_str(contents: &str) -> Result<Tree> {
    Ok(serde_json::from_str(contents)?)
}

/// Load a `Tree` from any reader producing JSON.
pub fn load_tree_from_reader(mut reader: impl Read) -> Result<Tree> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    load_tree_from_str(&buf)
}

/// Render a `Tree` as pretty-printed JSON.
pub fn write_tree_to_string(tree: &Tree) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Persist a `Tree` as JSON to the provided path.
pub fn write_tree_to_file(path: &Path, tree: &Tree) -> Result<()> {
    let contents = write_tree_to_string(tree)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn snapshot_round_trip() -> crate::Result<()> {
        let tree = Tree::block(
            Tree::prefix(
                Tree::name("-").with_span(Span::new(1, 1, 2)),
                Tree::real(3.14).with_span(Span::new(1, 2, 6)),
            )
            .with_span(Span::new(1, 1, 6)),
            "(",
            ")",
        )
        .with_span(Span::new(1, 0, 7));

        let json = write_tree_to_string(&tree)?;
        let back = load_tree_from_str(&json)?;
        assert_eq!(back, tree);
        Ok(())
    }

    #[test]
    fn null_spans_are_omitted() -> crate::Result<()> {
        let tree = Tree::infix(";", Tree::integer(1), Tree::integer(2));
        let json = write_tree_to_string(&tree)?;
        assert!(!json.contains("\"span\""));
        assert_eq!(load_tree_from_str(&json)?, tree);
        Ok(())
    }
}
