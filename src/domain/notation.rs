//! Move notation formatting.
//!
//! This is the seam to the external formatter: a pure function from a
//! position and a move to notation text. The linearization engine never
//! calls it directly; it only reads the notation cached on tree nodes by
//! whoever built the tree.

use serde::{Deserialize, Serialize};
use shakmaty::san::{San, SanPlus};
use shakmaty::{Chess, Move, Position};
use thiserror::Error;

/// Which notation the formatter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NotationStyle {
    /// Standard algebraic notation.
    #[default]
    San,
    /// SAN with check/checkmate suffixes.
    SanPlus,
    /// Plain UCI coordinates.
    Uci,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move is not legal in this position")]
    IllegalMove,
}

/// Format one move against the position it is played from.
///
/// Fails if the move is not legal for the position; the caller decides
/// whether that is fatal (tree building) or rendered as a placeholder
/// (layout of an already-built node).
pub fn format_move(pos: &Chess, mv: &Move, style: NotationStyle) -> Result<String, NotationError> {
    if !pos.legal_moves().contains(mv) {
        return Err(NotationError::IllegalMove);
    }
    let text = match style {
        NotationStyle::San => San::from_move(pos, mv.clone()).to_string(),
        NotationStyle::SanPlus => SanPlus::from_move(pos.clone(), mv.clone()).to_string(),
        NotationStyle::Uci => mv.to_uci(pos.castles().mode()).to_string(),
    };
    Ok(text)
}
