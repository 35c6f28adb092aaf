//! Collapses raw mouse events into one sample per frame.

use crate::geometry::Position;

/// The state of the primary mouse button and cursor for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseSample {
    /// The button went down since the previous frame.
    pub pressed: bool,
    /// The button is down now.
    pub held: bool,
    /// The button went up since the previous frame.
    pub released: bool,
    pub cursor: Position,
}

impl MouseSample {
    pub fn idle(cursor: Position) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn press(cursor: Position) -> Self {
        Self {
            pressed: true,
            held: true,
            released: false,
            cursor,
        }
    }

    pub fn hold(cursor: Position) -> Self {
        Self {
            pressed: false,
            held: true,
            released: false,
            cursor,
        }
    }

    pub fn release(cursor: Position) -> Self {
        Self {
            pressed: false,
            held: false,
            released: true,
            cursor,
        }
    }
}

/// Front ends feed events in as they arrive and call `sample` once per frame.
#[derive(Debug, Clone, Default)]
pub struct MouseSampler {
    down: bool,
    pressed: bool,
    released: bool,
    cursor: Position,
}

impl MouseSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, position: Position) {
        self.cursor = position;
    }

    pub fn button_down(&mut self, position: Position) {
        self.cursor = position;
        if !self.down {
            self.down = true;
            self.pressed = true;
        }
    }

    pub fn button_up(&mut self, position: Position) {
        self.cursor = position;
        if self.down {
            self.down = false;
            self.released = true;
        }
    }

    pub fn sample(&mut self) -> MouseSample {
        let sample = MouseSample {
            pressed: self.pressed,
            held: self.down,
            released: self.released,
            cursor: self.cursor,
        };
        self.pressed = false;
        self.released = false;
        sample
    }
}
