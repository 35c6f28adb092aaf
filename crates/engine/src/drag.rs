//! The grab, drag and release protocol that turns mouse samples into moves.
//!
//! A press over a piece of the side to move arms a gesture and snapshots the
//! piece's resting position. Holding the button grabs the armed piece and
//! makes it follow the raw cursor. Releasing resolves the gesture: if the
//! square under the piece is a legal destination from the snapshot, the piece
//! settles on that square; otherwise it snaps back to the snapshot.

use std::mem;

use tracing::{debug, info, trace};

use crate::config::CapturePolicy;
use crate::constants::Color;
use crate::geometry::{position_of, square_of, Board, Position};
use crate::input::MouseSample;
use crate::legal::destinations_for;
use crate::piece::{PieceId, PieceSet};
use crate::r#move::{DropOutcome, MoveIntent};
use crate::squarelist::SquareList;

#[derive(Debug, Clone)]
pub struct Gesture {
    pub piece: PieceId,
    pub rest: Position,
    pub destinations: SquareList,
}

#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Pressed over an eligible piece, not yet moving.
    Armed(Gesture),
    /// The piece tracks the cursor.
    Grabbed(Gesture),
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True from the press that armed a gesture until its release.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn grabbed(&self) -> Option<PieceId> {
        match &self.state {
            DragState::Grabbed(gesture) => Some(gesture.piece),
            _ => None,
        }
    }

    /// Legal destinations of the grabbed piece, for highlighting.
    pub fn highlighted(&self) -> Option<&SquareList> {
        match &self.state {
            DragState::Grabbed(gesture) => Some(&gesture.destinations),
            _ => None,
        }
    }

    /// Abandons any gesture without touching the pieces.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Processes one frame of input. Returns the outcome when a gesture ends.
    pub fn update(
        &mut self,
        sample: &MouseSample,
        side: Color,
        pieces: &mut PieceSet,
        board: &Board,
        capture: CapturePolicy,
    ) -> Option<DropOutcome> {
        if sample.pressed {
            self.press(sample.cursor, side, pieces, board, capture);
        }
        if sample.held {
            self.hold(sample.cursor, pieces);
        }
        if sample.released {
            return self.release(pieces, board, capture);
        }
        None
    }

    fn press(
        &mut self,
        cursor: Position,
        side: Color,
        pieces: &PieceSet,
        board: &Board,
        capture: CapturePolicy,
    ) {
        if self.is_active() {
            return;
        }
        let square = square_of(cursor, board);
        let Some(piece) = pieces.piece_of_color_at(square, side, board) else {
            debug!(%square, %side, "press on no eligible piece");
            return;
        };
        debug!(%square, kind = %piece.kind(), color = %piece.color(), "armed");
        self.state = DragState::Armed(Gesture {
            piece: piece.id(),
            rest: piece.position,
            destinations: destinations_for(piece, piece.position, pieces, board, capture),
        });
    }

    fn hold(&mut self, cursor: Position, pieces: &mut PieceSet) {
        if matches!(self.state, DragState::Armed(_)) {
            if let DragState::Armed(gesture) = mem::take(&mut self.state) {
                debug!(piece = gesture.piece.index(), "grabbed");
                self.state = DragState::Grabbed(gesture);
            }
        }
        if let Some(id) = self.grabbed() {
            match pieces.get_mut(id) {
                Some(piece) => {
                    trace!(x = cursor.x, y = cursor.y, "dragging");
                    piece.position = cursor;
                }
                None => self.state = DragState::Idle,
            }
        }
    }

    fn release(
        &mut self,
        pieces: &mut PieceSet,
        board: &Board,
        capture: CapturePolicy,
    ) -> Option<DropOutcome> {
        let gesture = match mem::take(&mut self.state) {
            DragState::Idle => return None,
            DragState::Armed(gesture) | DragState::Grabbed(gesture) => gesture,
        };
        let piece = pieces.get(gesture.piece)?;
        let intent = MoveIntent {
            piece: gesture.piece,
            origin: gesture.rest,
            destination: piece.position,
        };
        let legal = destinations_for(piece, intent.origin, pieces, board, capture);
        let from = intent.from_square(board);
        let to = intent.to_square(board);

        if legal.is_empty() || !legal.contains(to) {
            if let Some(piece) = pieces.get_mut(intent.piece) {
                piece.position = intent.origin;
            }
            debug!(%from, %to, "illegal drop, snapped back");
            return Some(DropOutcome::SnappedBack {
                piece: intent.piece,
                at: from,
            });
        }

        let captured = match capture {
            CapturePolicy::Blocked => None,
            CapturePolicy::Enemy => pieces
                .occupant_except(to, intent.piece, board)
                .map(|occupant| occupant.id())
                .and_then(|id| pieces.remove(id)),
        };
        if let Some(piece) = pieces.get_mut(intent.piece) {
            piece.position = position_of(to, board);
        }
        info!(%from, %to, captured = captured.is_some(), "move accepted");
        Some(DropOutcome::Moved {
            piece: intent.piece,
            from,
            to,
            captured,
        })
    }
}
