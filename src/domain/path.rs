//! Path addressing for move-tree nodes.
//!
//! A path is the concatenation of node ids from the root down to a node,
//! one `char` per ply. The empty path denotes the root. Ancestry is a plain
//! string-prefix test, which makes paths cheap to compare and stable across
//! re-renders as long as the tree is structurally unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// String-encoded address of a node in the move tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Path(String);

impl Path {
    /// The empty path, addressing the root.
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of a direct child with the given id.
    #[must_use]
    pub fn append(&self, id: char) -> Path {
        let mut inner = String::with_capacity(self.0.len() + 1);
        inner.push_str(&self.0);
        inner.push(id);
        Path(inner)
    }

    /// True iff `other` addresses this node or one of its ancestors,
    /// i.e. `other` is a prefix of `self`.
    pub fn contains(&self, other: &Path) -> bool {
        self.0.starts_with(&other.0)
    }

    /// Node ids from the root down.
    pub fn ids(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of plies from the root.
    pub fn depth(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_empty() {
        let root = Path::root();
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.as_str(), "");
    }

    #[test]
    fn test_append_builds_child_paths() {
        let path = Path::root().append('a').append('b');
        assert_eq!(path.as_str(), "ab");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.ids().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn test_contains_is_prefix_ancestry() {
        let deep = Path::from("abc");
        assert!(deep.contains(&Path::root()));
        assert!(deep.contains(&Path::from("a")));
        assert!(deep.contains(&Path::from("ab")));
        assert!(deep.contains(&deep.clone()));
        assert!(!deep.contains(&Path::from("b")));
        assert!(!deep.contains(&Path::from("abcd")));
    }

    #[test]
    fn test_root_contains_only_itself() {
        assert!(Path::root().contains(&Path::root()));
        assert!(!Path::root().contains(&Path::from("a")));
    }
}
