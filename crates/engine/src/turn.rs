//! Whose turn it is, and when that changes.
//!
//! A turn ends when a legal move completes or, if a turn duration is set,
//! when that much wall-clock time has passed since the turn began. The clock
//! is sampled once per frame by the caller; nothing here schedules work.

use std::time::{Duration, Instant};

use tracing::info;

use crate::constants::Color;

#[derive(Debug, Clone)]
pub struct TurnController {
    side: Color,
    started: Instant,
    duration: Option<Duration>,
}

impl TurnController {
    pub fn new(duration: Option<Duration>, now: Instant) -> Self {
        Self {
            side: Color::White,
            started: now,
            duration,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Time left before the timer hands the turn over, if a timer is set.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.duration
            .map(|limit| limit.saturating_sub(self.elapsed(now)))
    }

    /// Per-frame timer check. Expiry is not acted on while `drag_active`, so
    /// a piece in hand is never orphaned by a turn change. Returns true when
    /// the turn flipped.
    pub fn tick(&mut self, now: Instant, drag_active: bool) -> bool {
        let Some(limit) = self.duration else {
            return false;
        };
        if drag_active || self.elapsed(now) <= limit {
            return false;
        }
        self.flip(now);
        info!(side = %self.side, "turn time expired");
        true
    }

    /// A legal move completed; hand the turn over and restart the timer.
    pub fn complete_move(&mut self, now: Instant) {
        self.flip(now);
        info!(side = %self.side, "turn passed after move");
    }

    pub fn reset(&mut self, now: Instant) {
        self.side = Color::White;
        self.started = now;
    }

    fn flip(&mut self, now: Instant) {
        self.side = self.side.opponent();
        self.started = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: Duration = Duration::from_secs(10);

    #[test]
    fn test_white_moves_first() {
        let turn = TurnController::new(Some(TURN), Instant::now());
        assert_eq!(turn.side_to_move(), Color::White);
    }

    #[test]
    fn test_timer_flips_after_duration() {
        let t0 = Instant::now();
        let mut turn = TurnController::new(Some(TURN), t0);

        assert!(!turn.tick(t0 + Duration::from_secs(10), false));
        assert_eq!(turn.side_to_move(), Color::White);

        assert!(turn.tick(t0 + Duration::from_millis(10_001), false));
        assert_eq!(turn.side_to_move(), Color::Black);

        // The timer restarted at the flip.
        assert!(!turn.tick(t0 + Duration::from_secs(15), false));
        assert!(turn.tick(t0 + Duration::from_secs(21), false));
        assert_eq!(turn.side_to_move(), Color::White);
    }

    #[test]
    fn test_timer_waits_for_active_drag() {
        let t0 = Instant::now();
        let mut turn = TurnController::new(Some(TURN), t0);
        assert!(!turn.tick(t0 + Duration::from_secs(12), true));
        assert_eq!(turn.side_to_move(), Color::White);
        assert!(turn.tick(t0 + Duration::from_secs(13), false));
        assert_eq!(turn.side_to_move(), Color::Black);
    }

    #[test]
    fn test_move_flips_and_restarts_timer() {
        let t0 = Instant::now();
        let mut turn = TurnController::new(Some(TURN), t0);
        turn.complete_move(t0 + Duration::from_secs(8));
        assert_eq!(turn.side_to_move(), Color::Black);
        assert_eq!(turn.remaining(t0 + Duration::from_secs(9)), Some(Duration::from_secs(9)));
        assert!(!turn.tick(t0 + Duration::from_secs(17), false));
    }

    #[test]
    fn test_no_timer() {
        let t0 = Instant::now();
        let mut turn = TurnController::new(None, t0);
        assert!(!turn.tick(t0 + Duration::from_secs(3600), false));
        assert_eq!(turn.remaining(t0), None);
        assert_eq!(turn.side_to_move(), Color::White);
    }

    #[test]
    fn test_remaining_saturates() {
        let t0 = Instant::now();
        let turn = TurnController::new(Some(TURN), t0);
        assert_eq!(turn.remaining(t0 + Duration::from_secs(4)), Some(Duration::from_secs(6)));
        assert_eq!(turn.remaining(t0 + Duration::from_secs(40)), Some(Duration::ZERO));
    }
}
