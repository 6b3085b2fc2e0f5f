//! Pure domain layer: the move tree, path addressing and the notation seam.
//! No presentation concerns live here.

pub mod notation;
pub mod path;
pub mod tree;

pub use notation::{NotationError, NotationStyle, format_move};
pub use path::Path;
pub use tree::{Comment, CommentSide, Glyph, MoveTree, Node, TreeError};
