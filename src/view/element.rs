//! Display elements produced by the linearization engine.
//!
//! The whole element sequence is recomputed on every layout pass and handed
//! to the presentation adapter, which owns it from then on. Nothing here is
//! mutated in place.

use serde::{Deserialize, Serialize};

use crate::domain::path::Path;
use crate::domain::tree::{CommentSide, Glyph};

/// Text shown for a move whose notation could not be formatted.
pub const NOTATION_PLACEHOLDER: &str = "[?]";

/// Text shown where a variation was cut by the truncation budget.
pub const TRUNCATION_MARKER: &str = "[...]";

/// One move of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveElement {
    pub path: Path,
    /// Raw half-move number; parity tells the presentation layer whose move
    /// it is. Any numbering offset is applied downstream.
    pub ply: u32,
    pub text: String,
    pub glyphs: Vec<Glyph>,
    /// This move is the currently viewed node.
    pub active: bool,
    pub computer: bool,
}

/// One annotation of the layout, adjacent to the move it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentElement {
    pub path: Path,
    pub text: String,
    pub side: CommentSide,
}

/// One unit of the linearized layout. `Line`, `Inline` and `Interrupt` nest
/// further elements; everything else is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Move(MoveElement),
    Comment(CommentElement),
    /// A boxed side-variation.
    Line(Vec<Element>),
    /// A side-variation shown inline next to the mainline move.
    Inline(Vec<Element>),
    /// Wraps the `Line` blocks forking off one mainline point.
    Interrupt(Vec<Element>),
    /// A variation cut short by the truncation budget.
    Truncated(Path),
}

/// Flatten an element sequence into a linear text transcript.
///
/// Variations and inline branches go in parentheses, comments in braces,
/// truncations as the truncation marker. Move numbers follow game
/// convention: `N.` before a white move, `N...` where a black move opens a
/// line or resumes after an interruption, so the original move order can be
/// read back from the text.
pub fn transcript(elements: &[Element], ply_offset: u32) -> String {
    let mut out = String::new();
    write_elements(&mut out, elements, ply_offset, true);
    out
}

fn write_elements(out: &mut String, elements: &[Element], ply_offset: u32, mut at_line_start: bool) {
    for element in elements {
        match element {
            Element::Move(mv) => {
                push_separator(out);
                let ply = mv.ply + ply_offset;
                let number = ply.div_ceil(2);
                if ply % 2 == 1 {
                    out.push_str(&format!("{number}. "));
                } else if at_line_start {
                    out.push_str(&format!("{number}... "));
                }
                out.push_str(&mv.text);
                for glyph in &mv.glyphs {
                    out.push_str(&glyph.symbol);
                }
                at_line_start = false;
            }
            Element::Comment(comment) => {
                push_separator(out);
                out.push('{');
                out.push_str(&comment.text);
                out.push('}');
            }
            Element::Line(children) | Element::Inline(children) => {
                push_separator(out);
                out.push('(');
                write_elements(out, children, ply_offset, true);
                out.push(')');
                // Mainline numbering restarts after the detour.
                at_line_start = true;
            }
            Element::Interrupt(children) => {
                write_elements(out, children, ply_offset, true);
                at_line_start = true;
            }
            Element::Truncated(_) => {
                push_separator(out);
                out.push_str(TRUNCATION_MARKER);
            }
        }
    }
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('(') {
        out.push(' ');
    }
}
