//! Defines the representation of an attempted move.

use crate::geometry::{square_of, Board, Position, Square};
use crate::piece::{Piece, PieceId};

/// A move attempt produced when a drag ends: which piece, where it rested
/// before the drag, and where it was let go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    pub piece: PieceId,
    pub origin: Position,
    pub destination: Position,
}

impl MoveIntent {
    pub fn from_square(&self, board: &Board) -> Square {
        square_of(self.origin, board)
    }

    pub fn to_square(&self, board: &Board) -> Square {
        square_of(self.destination, board)
    }
}

/// How a drop was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// The drop square was legal and the piece now rests there.
    Moved {
        piece: PieceId,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The drop was illegal and the piece went back to `at`.
    SnappedBack { piece: PieceId, at: Square },
}

impl DropOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. })
    }

    pub fn piece(&self) -> PieceId {
        match self {
            DropOutcome::Moved { piece, .. } | DropOutcome::SnappedBack { piece, .. } => *piece,
        }
    }
}
