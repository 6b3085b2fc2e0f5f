//! Move tree data structure for representing games with variations.
//!
//! Nodes own their children; the first child at every branching point is the
//! preferred continuation. Sibling ids are single characters, unique among
//! siblings only, so the concatenated ids form a node's [`Path`].

use serde::{Deserialize, Serialize};
use shakmaty::{Chess, Move, Position};
use thiserror::Error;
use tracing::debug;

use crate::domain::notation::{NotationError, NotationStyle, format_move};
use crate::domain::path::Path;

/// Sibling ids, assigned positionally at insertion time.
const ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Id carried by the root node. The root is never addressed through a path,
/// so this never appears in one.
const ROOT_ID: char = '\0';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate sibling id '{id}' under \"{path}\"")]
    DuplicateSiblingId { path: Path, id: char },
    #[error("no node at path \"{0}\"")]
    UnknownPath(Path),
    #[error("too many variations under \"{0}\"")]
    TooManySiblings(Path),
    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Which side of the move a comment attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentSide {
    Before,
    After,
}

/// A text annotation attached to a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub side: CommentSide,
}

impl Comment {
    pub fn before(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            side: CommentSide::Before,
        }
    }

    pub fn after(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            side: CommentSide::After,
        }
    }
}

/// An annotation symbol attached to a move (e.g. "!?", "±").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub symbol: String,
    pub name: String,
}

impl Glyph {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// One ply in the game tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique among siblings, not globally.
    pub id: char,
    /// Half-move number from game start; the root is 0.
    pub ply: u32,
    /// Notation of the move that led here. `None` on the root, or when
    /// formatting failed and the layout should show a placeholder.
    pub san: Option<String>,
    pub glyphs: Vec<Glyph>,
    pub comments: Vec<Comment>,
    /// Demotes a positionally-first child to side-line treatment.
    pub force_variation: bool,
    /// Node stems from machine analysis rather than a played game.
    pub computer: bool,
    /// Position after the move. Read only by the builder, never by the
    /// linearization engine.
    pub position: Chess,
    /// First child is the preferred continuation; order is significant.
    pub children: Vec<Node>,
}

impl Node {
    /// Create a move node with the given sibling id, ply and notation.
    #[must_use]
    pub fn new(id: char, ply: u32, san: impl Into<String>) -> Self {
        Self {
            id,
            ply,
            san: Some(san.into()),
            glyphs: Vec::new(),
            comments: Vec::new(),
            force_variation: false,
            computer: false,
            position: Chess::default(),
            children: Vec::new(),
        }
    }

    /// A node whose notation could not be formatted; the layout renders a
    /// placeholder for it.
    #[must_use]
    pub fn without_notation(id: char, ply: u32) -> Self {
        let mut node = Self::new(id, ply, "");
        node.san = None;
        node
    }

    /// The root node of a fresh tree.
    #[must_use]
    pub fn root() -> Self {
        Self::without_notation(ROOT_ID, 0)
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    #[must_use]
    pub fn with_glyph(mut self, glyph: Glyph) -> Self {
        self.glyphs.push(glyph);
        self
    }

    #[must_use]
    pub fn with_force_variation(mut self, force: bool) -> Self {
        self.force_variation = force;
        self
    }

    #[must_use]
    pub fn with_computer(mut self, computer: bool) -> Self {
        self.computer = computer;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Chess) -> Self {
        self.position = position;
        self
    }

    /// Bounded branching probe: does this subtree fork anywhere within
    /// `max_depth` plies? Exhausting the depth bound counts as a fork, so
    /// callers fall back to boxed rendering for anything too deep to probe.
    pub fn has_branching(&self, max_depth: u32) -> bool {
        if max_depth == 0 {
            return true;
        }
        if self.children.len() > 1 {
            return true;
        }
        match self.children.first() {
            Some(child) => child.has_branching(max_depth - 1),
            None => false,
        }
    }
}

/// A game with variations, rooted at the starting position.
#[derive(Debug, Clone)]
pub struct MoveTree {
    pub root: Node,
}

impl Default for MoveTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTree {
    /// A tree with just the root (starting position).
    pub fn new() -> Self {
        Self { root: Node::root() }
    }

    /// Wrap an externally built node tree.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Resolve a path to a node.
    pub fn node_at(&self, path: &Path) -> Option<&Node> {
        let mut node = &self.root;
        for id in path.ids() {
            node = node.children.iter().find(|c| c.id == id)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, path: &Path) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for id in path.ids() {
            node = node.children.iter_mut().find(|c| c.id == id)?;
        }
        Some(node)
    }

    /// Play a move from the node at `at`. If a child with the same notation
    /// already exists, returns its path; otherwise appends a new child with
    /// the next sibling id and the replayed position.
    pub fn add_move(&mut self, at: &Path, mv: Move, style: NotationStyle) -> Result<Path, TreeError> {
        let node = self
            .node_at_mut(at)
            .ok_or_else(|| TreeError::UnknownPath(at.clone()))?;
        let san = format_move(&node.position, &mv, style)?;
        if let Some(existing) = node
            .children
            .iter()
            .find(|c| c.san.as_deref() == Some(san.as_str()))
        {
            return Ok(at.append(existing.id));
        }
        let id = ID_ALPHABET
            .chars()
            .nth(node.children.len())
            .ok_or_else(|| TreeError::TooManySiblings(at.clone()))?;
        // Legality was already checked by format_move.
        let position = node.position.clone().play(mv).expect("legal move");
        let child = Node::new(id, node.ply + 1, san).with_position(position);
        node.children.push(child);
        Ok(at.append(id))
    }

    /// The preferred line of play: first child at every branching point.
    pub fn main_line(&self) -> Vec<&Node> {
        let mut line = Vec::new();
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            line.push(child);
            node = child;
        }
        line
    }

    /// Structural validation, run before any traversal. Duplicate sibling
    /// ids would make paths ambiguous and are fatal. Cycles cannot be
    /// expressed in an owned-children tree.
    pub fn validate(&self) -> Result<(), TreeError> {
        validate_node(&self.root, &Path::root())
    }
}

fn validate_node(node: &Node, path: &Path) -> Result<(), TreeError> {
    for (i, child) in node.children.iter().enumerate() {
        if node.children[..i].iter().any(|c| c.id == child.id) {
            debug!(%path, id = %child.id, "duplicate sibling id");
            return Err(TreeError::DuplicateSiblingId {
                path: path.clone(),
                id: child.id,
            });
        }
        validate_node(child, &path.append(child.id))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Role, Square};

    fn mv(role: Role, from: Square, to: Square) -> Move {
        Move::Normal {
            role,
            from,
            to,
            capture: None,
            promotion: None,
        }
    }

    #[test]
    fn test_new_tree() {
        let tree = MoveTree::new();
        assert!(tree.root.children.is_empty());
        assert!(tree.main_line().is_empty());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_add_move() {
        let mut tree = MoveTree::new();
        let path = tree
            .add_move(&Path::root(), mv(Role::Pawn, Square::E2, Square::E4), NotationStyle::San)
            .unwrap();
        assert_eq!(path, Path::from("a"));

        let node = tree.node_at(&path).unwrap();
        assert_eq!(node.san.as_deref(), Some("e4"));
        assert_eq!(node.ply, 1);

        let reply = tree
            .add_move(&path, mv(Role::Pawn, Square::E7, Square::E5), NotationStyle::San)
            .unwrap();
        assert_eq!(reply, Path::from("aa"));
        assert_eq!(tree.node_at(&reply).unwrap().ply, 2);
    }

    #[test]
    fn test_add_existing_move_reuses_node() {
        let mut tree = MoveTree::new();
        let e4 = mv(Role::Pawn, Square::E2, Square::E4);
        let first = tree.add_move(&Path::root(), e4.clone(), NotationStyle::San).unwrap();
        let second = tree.add_move(&Path::root(), e4, NotationStyle::San).unwrap();
        assert_eq!(first, second);
        assert_eq!(tree.root.children.len(), 1);
    }

    #[test]
    fn test_add_variation_gets_next_sibling_id() {
        let mut tree = MoveTree::new();
        tree.add_move(&Path::root(), mv(Role::Pawn, Square::E2, Square::E4), NotationStyle::San)
            .unwrap();
        let var = tree
            .add_move(&Path::root(), mv(Role::Pawn, Square::D2, Square::D4), NotationStyle::San)
            .unwrap();
        assert_eq!(var, Path::from("b"));
        assert_eq!(tree.root.children.len(), 2);
        assert_eq!(tree.main_line()[0].san.as_deref(), Some("e4"));
    }

    #[test]
    fn test_add_illegal_move_fails() {
        let mut tree = MoveTree::new();
        let err = tree
            .add_move(&Path::root(), mv(Role::Pawn, Square::E3, Square::E5), NotationStyle::San)
            .unwrap_err();
        assert_eq!(err, TreeError::Notation(NotationError::IllegalMove));
    }

    #[test]
    fn test_add_move_at_unknown_path_fails() {
        let mut tree = MoveTree::new();
        let err = tree
            .add_move(&Path::from("z"), mv(Role::Pawn, Square::E2, Square::E4), NotationStyle::San)
            .unwrap_err();
        assert_eq!(err, TreeError::UnknownPath(Path::from("z")));
    }

    #[test]
    fn test_validate_rejects_duplicate_sibling_ids() {
        let tree = MoveTree::from_root(
            Node::root()
                .child(Node::new('a', 1, "e4"))
                .child(Node::new('a', 1, "d4")),
        );
        assert_eq!(
            tree.validate(),
            Err(TreeError::DuplicateSiblingId {
                path: Path::root(),
                id: 'a',
            })
        );
    }

    #[test]
    fn test_has_branching_detects_forks() {
        let forked = Node::new('a', 1, "e4").child(
            Node::new('a', 2, "e5")
                .child(Node::new('a', 3, "Nf3"))
                .child(Node::new('b', 3, "Nc3")),
        );
        assert!(forked.has_branching(6));
        assert!(!forked.has_branching(1));
    }

    #[test]
    fn test_has_branching_counts_depth_exhaustion_as_fork() {
        // A bare chain of six plies below the probed node exceeds the bound.
        let mut chain = Node::new('a', 7, "g3");
        for ply in (1..7).rev() {
            chain = Node::new('a', ply, "x").child(chain);
        }
        assert!(chain.has_branching(6));

        let mut short = Node::new('a', 3, "x");
        for ply in (1..3).rev() {
            short = Node::new('a', ply, "x").child(short);
        }
        assert!(!short.has_branching(6));
    }

    #[test]
    fn test_node_at_follows_ids() {
        let tree = MoveTree::from_root(
            Node::root().child(
                Node::new('a', 1, "e4")
                    .child(Node::new('a', 2, "e5"))
                    .child(Node::new('b', 2, "c5")),
            ),
        );
        assert_eq!(tree.node_at(&Path::from("ab")).unwrap().san.as_deref(), Some("c5"));
        assert!(tree.node_at(&Path::from("ba")).is_none());
    }
}
