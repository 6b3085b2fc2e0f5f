//! Per-render layout configuration.

use crate::domain::notation::NotationStyle;
use crate::domain::path::Path;
use crate::view::element::Element;

/// Pre-rendered replacement for one variation line, supplied by an external
/// collaborator (e.g. a retrospective-analysis overlay). When it governs a
/// branch node, the engine uses it verbatim instead of rendering the line.
#[derive(Debug, Clone, PartialEq)]
pub struct RetroLine {
    /// Path of the branch node the replacement stands in for.
    pub path: Path,
    pub line: Element,
}

/// Immutable configuration snapshot for one linearization pass. Built once
/// per render request and passed by reference through the recursion; never
/// mutated mid-traversal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutContext {
    /// Path of the node currently being viewed. Its line is exempt from
    /// truncation, and its move element is flagged active.
    pub current_path: Path,
    pub show_comments: bool,
    pub show_glyphs: bool,
    /// Notation style the tree was formatted with; threaded through
    /// unchanged for the presentation layer.
    pub notation: NotationStyle,
    /// Move-number offset for games that do not start counting at ply zero.
    /// Supplied externally and never recomputed here.
    pub ply_offset: u32,
    pub retro: Option<RetroLine>,
}

impl LayoutContext {
    /// Context with everything visible and the given cursor position.
    pub fn new(current_path: Path) -> Self {
        Self {
            current_path,
            show_comments: true,
            show_glyphs: true,
            ..Self::default()
        }
    }
}
