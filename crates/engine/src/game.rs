//! One playing session, advanced one frame at a time.

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::Config;
use crate::constants::Color;
use crate::drag::DragController;
use crate::error::Result;
use crate::geometry::Board;
use crate::input::MouseSample;
use crate::piece::{Piece, PieceId, PieceSet};
use crate::r#move::DropOutcome;
use crate::squarelist::SquareList;
use crate::turn::TurnController;

#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    board: Board,
    pieces: PieceSet,
    drag: DragController,
    turn: TurnController,
}

impl Game {
    pub fn new(config: Config, now: Instant) -> Result<Self> {
        let board = Board::from_config(&config)?;
        let pieces = PieceSet::standard(&board);
        let turn = TurnController::new(config.turn_duration, now);
        info!(columns = board.columns(), rows = board.rows(), "new game");
        Ok(Self {
            config,
            board,
            pieces,
            drag: DragController::new(),
            turn,
        })
    }

    /// Starts over from the standard position with White to move.
    pub fn reset(&mut self, now: Instant) {
        self.pieces = PieceSet::standard(&self.board);
        self.drag.reset();
        self.turn.reset(now);
        info!("game reset");
    }

    /// Runs one frame: the drag protocol first, then the turn clock. A
    /// completed move hands the turn over immediately; otherwise the timer
    /// gets its chance once no gesture is in progress.
    pub fn update(&mut self, sample: &MouseSample, now: Instant) -> Option<DropOutcome> {
        let outcome = self.drag.update(
            sample,
            self.turn.side_to_move(),
            &mut self.pieces,
            &self.board,
            self.config.capture,
        );
        match &outcome {
            Some(DropOutcome::Moved { .. }) => self.turn.complete_move(now),
            _ => {
                self.turn.tick(now, self.drag.is_active());
            }
        }
        outcome
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn side_to_move(&self) -> Color {
        self.turn.side_to_move()
    }

    pub fn grabbed(&self) -> Option<PieceId> {
        self.drag.grabbed()
    }

    pub fn grabbed_piece(&self) -> Option<&Piece> {
        self.grabbed().and_then(|id| self.pieces.get(id))
    }

    /// Squares to highlight; empty unless a piece is grabbed.
    pub fn highlighted(&self) -> SquareList {
        self.drag.highlighted().cloned().unwrap_or_default()
    }

    pub fn turn_remaining(&self, now: Instant) -> Option<Duration> {
        self.turn.remaining(now)
    }
}
