//! Display generation: turns the move tree into presentation-ready elements.

pub(crate) mod comments;
pub mod context;
pub mod element;
pub mod linearize;

pub use context::{LayoutContext, RetroLine};
pub use element::{CommentElement, Element, MoveElement, transcript};
pub use linearize::linearize;
