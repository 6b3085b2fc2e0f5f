//! Linearization of branching move trees for game-analysis views.
//!
//! An analysis interface shows a mainline plus variations. This crate walks
//! that tree and produces the flat, ordered sequence of typed elements a
//! presentation layer renders: moves, comments, boxed variation lines,
//! inline branches for simple two-way forks, and truncation markers for
//! deep off-path engine lines. It does no rendering and no position work of
//! its own beyond the tree-building seam.
//!
//! # Example
//!
//! ```
//! use moveview::{LayoutContext, MoveTree, Node, Path, linearize, transcript};
//!
//! let tree = MoveTree::from_root(
//!     Node::root().child(
//!         Node::new('a', 1, "e4")
//!             .child(Node::new('a', 2, "e5"))
//!             .child(Node::new('b', 2, "c5")),
//!     ),
//! );
//! let elements = linearize(&tree, &LayoutContext::new(Path::root())).unwrap();
//! assert_eq!(transcript(&elements, 0), "1. e4 e5 (2... c5)");
//! ```

pub mod domain;
pub mod view;

pub use domain::notation::{NotationError, NotationStyle, format_move};
pub use domain::path::Path;
pub use domain::tree::{Comment, CommentSide, Glyph, MoveTree, Node, TreeError};
pub use view::context::{LayoutContext, RetroLine};
pub use view::element::{CommentElement, Element, MoveElement, transcript};
pub use view::linearize::linearize;
