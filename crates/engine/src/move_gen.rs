//! Candidate destination squares for each piece kind.
//!
//! Candidates are pure geometry measured from the square under `from`, which
//! may be a resting position or a snapshot taken before a drag. Bounds and
//! own-colour occupancy are left to `legal::legal_destinations`; the only
//! occupancy consulted here is the blocking check inside a ray walk.

use crate::config::CapturePolicy;
use crate::constants::{PieceKind, DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::geometry::{square_of, Board, Position, Square};
use crate::piece::{Piece, PieceSet};
use crate::squarelist::SquareList;

/// Generates the candidate squares for `piece` as if it stood at `from`.
pub fn candidate_squares(
    piece: &Piece,
    from: Position,
    board: &Board,
    pieces: &PieceSet,
    capture: CapturePolicy,
) -> SquareList {
    let origin = square_of(from, board);
    let mut out = SquareList::new();
    match piece.kind() {
        PieceKind::Pawn => out.push(origin.offset(0, piece.color().forward())),
        PieceKind::King => add_steps(&mut out, origin, &ORTHOGONAL),
        PieceKind::Knight => add_steps(&mut out, origin, &KNIGHT_JUMPS),
        PieceKind::Rook => {
            let walker = RayWalker::new(piece, origin, board, pieces, capture);
            walker.walk_all(&mut out, &ORTHOGONAL);
        }
        PieceKind::Bishop => {
            let walker = RayWalker::new(piece, origin, board, pieces, capture);
            walker.walk_all(&mut out, &DIAGONAL);
        }
        PieceKind::Queen => {
            let walker = RayWalker::new(piece, origin, board, pieces, capture);
            walker.walk_all(&mut out, &DIAGONAL);
            walker.walk_all(&mut out, &ORTHOGONAL);
        }
    }
    out
}

fn add_steps(out: &mut SquareList, origin: Square, deltas: &[(i32, i32)]) {
    for &(dc, dr) in deltas {
        out.push(origin.offset(dc, dr));
    }
}

/// Walks straight lines away from a slider's square.
struct RayWalker<'a> {
    piece: &'a Piece,
    origin: Square,
    board: &'a Board,
    pieces: &'a PieceSet,
    capture: CapturePolicy,
}

impl<'a> RayWalker<'a> {
    fn new(
        piece: &'a Piece,
        origin: Square,
        board: &'a Board,
        pieces: &'a PieceSet,
        capture: CapturePolicy,
    ) -> Self {
        Self {
            piece,
            origin,
            board,
            pieces,
            capture,
        }
    }

    fn walk_all(&self, out: &mut SquareList, directions: &[(i32, i32)]) {
        for &direction in directions {
            self.walk(out, direction);
        }
    }

    /// Extends up to `board.reach()` squares along `(dc, dr)`. The walk ends
    /// before the first square held by another piece; under
    /// `CapturePolicy::Enemy` an enemy blocker is itself included.
    fn walk(&self, out: &mut SquareList, (dc, dr): (i32, i32)) {
        let mut current = self.origin;
        for _ in 0..self.board.reach() {
            current = current.offset(dc, dr);
            let occupant = self.pieces.occupant_except(current, self.piece.id(), self.board);
            if let Some(blocker) = occupant {
                if self.capture == CapturePolicy::Enemy && blocker.color() != self.piece.color() {
                    out.push(current);
                }
                return;
            }
            out.push(current);
        }
    }
}
