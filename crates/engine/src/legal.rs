//! Reduces candidate squares to the squares a piece may actually land on.

use crate::config::CapturePolicy;
use crate::constants::PieceKind;
use crate::geometry::{square_of, Board, Position};
use crate::move_gen::candidate_squares;
use crate::piece::{Piece, PieceSet};
use crate::squarelist::SquareList;

/// Filters `candidates` for `mover` standing at `from`.
///
/// Drops squares off the board, the mover's own square, duplicates, and
/// squares held by another piece. Under `CapturePolicy::Blocked` any occupant
/// blocks; under `CapturePolicy::Enemy` only an own-colour occupant blocks,
/// except for pawns, which never land on an occupied square.
pub fn legal_destinations(
    candidates: &SquareList,
    pieces: &PieceSet,
    mover: &Piece,
    from: Position,
    board: &Board,
    capture: CapturePolicy,
) -> SquareList {
    let origin = square_of(from, board);
    let mut out = SquareList::new();
    for &square in candidates {
        if !board.contains(square) || square == origin || out.contains(square) {
            continue;
        }
        if let Some(occupant) = pieces.occupant_except(square, mover.id(), board) {
            let blocks = match capture {
                CapturePolicy::Blocked => true,
                CapturePolicy::Enemy => {
                    occupant.color() == mover.color() || mover.kind() == PieceKind::Pawn
                }
            };
            if blocks {
                continue;
            }
        }
        out.push(square);
    }
    out
}

/// Candidate generation followed by the occupancy filter.
pub fn destinations_for(
    mover: &Piece,
    from: Position,
    pieces: &PieceSet,
    board: &Board,
    capture: CapturePolicy,
) -> SquareList {
    let candidates = candidate_squares(mover, from, board, pieces, capture);
    legal_destinations(&candidates, pieces, mover, from, board, capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Color;
    use crate::geometry::{position_of, Square};
    use crate::piece::PieceId;

    fn board() -> Board {
        Board::new((600, 600), (8, 8)).unwrap()
    }

    fn place(
        set: &mut PieceSet,
        board: &Board,
        kind: PieceKind,
        color: Color,
        sq: (i32, i32),
    ) -> PieceId {
        set.add(kind, color, position_of(Square::new(sq.0, sq.1), board))
    }

    fn legal(set: &PieceSet, board: &Board, id: PieceId, capture: CapturePolicy) -> Vec<Square> {
        let piece = set.get(id).unwrap();
        let mut squares = destinations_for(piece, piece.position, set, board, capture)
            .as_slice()
            .to_vec();
        squares.sort();
        squares
    }

    #[test]
    fn test_king_on_back_rank() {
        let board = board();
        let mut set = PieceSet::new();
        let king = place(&mut set, &board, PieceKind::King, Color::White, (4, 7));
        let mut expected = vec![Square::new(4, 6), Square::new(3, 7), Square::new(5, 7)];
        expected.sort();
        assert_eq!(legal(&set, &board, king, CapturePolicy::Blocked), expected);
    }

    #[test]
    fn test_never_leaves_the_board() {
        let board = board();
        let mut set = PieceSet::new();
        let ids = [
            place(&mut set, &board, PieceKind::Queen, Color::White, (0, 0)),
            place(&mut set, &board, PieceKind::Knight, Color::Black, (7, 7)),
            place(&mut set, &board, PieceKind::Rook, Color::White, (7, 0)),
            place(&mut set, &board, PieceKind::Pawn, Color::Black, (3, 7)),
        ];
        for id in ids {
            for policy in [CapturePolicy::Blocked, CapturePolicy::Enemy] {
                assert!(legal(&set, &board, id, policy).iter().all(|&sq| board.contains(sq)));
            }
        }
        // A black pawn on the last row has nowhere to go.
        assert!(legal(&set, &board, ids[3], CapturePolicy::Blocked).is_empty());
    }

    #[test]
    fn test_occupied_squares_block_regardless_of_color() {
        let board = board();
        let mut set = PieceSet::new();
        let knight = place(&mut set, &board, PieceKind::Knight, Color::White, (1, 7));
        place(&mut set, &board, PieceKind::Pawn, Color::White, (3, 6));
        place(&mut set, &board, PieceKind::Pawn, Color::Black, (2, 5));

        assert_eq!(legal(&set, &board, knight, CapturePolicy::Blocked), vec![Square::new(0, 5)]);
        assert_eq!(
            legal(&set, &board, knight, CapturePolicy::Enemy),
            vec![Square::new(0, 5), Square::new(2, 5)]
        );
    }

    #[test]
    fn test_queen_reaches_every_line_on_open_board() {
        let board = board();
        let mut set = PieceSet::new();
        let center = place(&mut set, &board, PieceKind::Queen, Color::White, (3, 3));
        let squares = legal(&set, &board, center, CapturePolicy::Blocked);
        assert_eq!(squares.len(), 27);
        assert!(squares.contains(&Square::new(3, 0)));
        assert!(squares.contains(&Square::new(7, 7)));
        assert!(squares.contains(&Square::new(0, 6)));

        let mut set = PieceSet::new();
        let corner = place(&mut set, &board, PieceKind::Queen, Color::Black, (0, 0));
        assert_eq!(legal(&set, &board, corner, CapturePolicy::Blocked).len(), 21);
    }

    #[test]
    fn test_pawn_never_captures_forward() {
        let board = board();
        let mut set = PieceSet::new();
        let pawn = place(&mut set, &board, PieceKind::Pawn, Color::White, (4, 4));
        place(&mut set, &board, PieceKind::Pawn, Color::Black, (4, 3));
        assert!(legal(&set, &board, pawn, CapturePolicy::Enemy).is_empty());
    }

    #[test]
    fn test_standard_opening_mobility() {
        let board = board();
        let set = PieceSet::standard(&board);
        let at = |col, row| set.piece_at(Square::new(col, row), &board).unwrap().id();

        assert_eq!(legal(&set, &board, at(4, 6), CapturePolicy::Blocked), vec![Square::new(4, 5)]);
        assert_eq!(
            legal(&set, &board, at(6, 7), CapturePolicy::Blocked),
            vec![Square::new(5, 5), Square::new(7, 5)]
        );
        for col in [0, 2, 3, 4, 5, 7] {
            assert!(legal(&set, &board, at(col, 7), CapturePolicy::Blocked).is_empty());
        }
    }

    #[test]
    fn test_filter_drops_origin_and_duplicates() {
        let board = board();
        let mut set = PieceSet::new();
        let king = place(&mut set, &board, PieceKind::King, Color::White, (2, 2));
        let piece = set.get(king).unwrap();
        let candidates: SquareList = [Square::new(2, 2), Square::new(2, 3), Square::new(2, 3)]
            .into_iter()
            .collect();
        let policy = CapturePolicy::Blocked;
        let out = legal_destinations(&candidates, &set, piece, piece.position, &board, policy);
        assert_eq!(out.as_slice(), &[Square::new(2, 3)]);
    }
}
