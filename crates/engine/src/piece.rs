//! The live pieces of a session.
//!
//! Pieces sit in a single arena and are addressed by `PieceId`. Ids are handed
//! out once and never reused, so a stale id simply stops resolving after the
//! piece has been captured.

use once_cell::sync::Lazy;

use crate::constants::{Color, PieceKind, BACK_RANK};
use crate::geometry::{position_of, square_of, Board, Position, Square};

/// The standard starting layout: kind, colour and square of every piece.
pub static STANDARD_SETUP: Lazy<Vec<(PieceKind, Color, Square)>> = Lazy::new(|| {
    let mut setup = Vec::with_capacity(32);
    for col in 0..8 {
        setup.push((PieceKind::Pawn, Color::Black, Square::new(col, 1)));
        setup.push((PieceKind::Pawn, Color::White, Square::new(col, 6)));
    }
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        setup.push((kind, Color::Black, Square::new(col as i32, 0)));
        setup.push((kind, Color::White, Square::new(col as i32, 7)));
    }
    setup
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    pub fn index(self) -> u32 {
        self.0
    }
}

/// A single piece. Kind and colour are fixed at creation; only the position
/// changes during play.
#[derive(Debug, Clone)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    pub position: Position,
}

impl Piece {
    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn square(&self, board: &Board) -> Square {
        square_of(self.position, board)
    }
}

// Identity, not value: two pieces with equal fields are still different pieces.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

#[derive(Debug, Clone, Default)]
pub struct PieceSet {
    pieces: Vec<Piece>,
    next_id: u32,
}

impl PieceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chess starting position laid out on `board`.
    pub fn standard(board: &Board) -> Self {
        let mut set = Self::new();
        for &(kind, color, square) in STANDARD_SETUP.iter() {
            set.add(kind, color, position_of(square, board));
        }
        set
    }

    pub fn add(&mut self, kind: PieceKind, color: Color, position: Position) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece {
            id,
            kind,
            color,
            position,
        });
        id
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.id == id)?;
        Some(self.pieces.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The first piece whose position maps to `square`.
    pub fn piece_at(&self, square: Square, board: &Board) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square(board) == square)
    }

    pub fn piece_of_color_at(&self, square: Square, color: Color, board: &Board) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.color == color && p.square(board) == square)
    }

    /// A piece other than `mover` standing on `square`.
    pub fn occupant_except(&self, square: Square, mover: PieceId, board: &Board) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.id != mover && p.square(board) == square)
    }
}

impl<'a> IntoIterator for &'a PieceSet {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
