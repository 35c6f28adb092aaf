//! Startup configuration for the board.

use std::time::Duration;

use crate::constants::{BOARD_COLUMNS, BOARD_ROWS};
use crate::error::{ConfigError, Result};

/// Whether a piece may end its move on a square held by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Every occupied square is off limits and sliding pieces stop before
    /// any piece, friend or foe.
    #[default]
    Blocked,
    /// Enemy-occupied squares are reachable and the occupant is removed.
    Enemy,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Window geometry, in pixels of whatever surface the front end draws on
    pub window_width: i32,
    pub window_height: i32,
    pub scale: i32,

    // Grid
    pub columns: i32,
    pub rows: i32,

    // Rules
    pub turn_duration: Option<Duration>,
    pub capture: CapturePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 600,
            window_height: 600,
            scale: 1,
            columns: 8,
            rows: 8,
            turn_duration: Some(Duration::from_secs(10)),
            capture: CapturePolicy::Blocked,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.columns != BOARD_COLUMNS || self.rows != BOARD_ROWS {
            return Err(ConfigError::UnsupportedGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.scale <= 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.window_width < self.columns || self.window_height < self.rows {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.turn_duration, Some(Duration::from_secs(10)));
        assert_eq!(config.capture, CapturePolicy::Blocked);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = Config {
            columns: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnsupportedGrid { columns: 0, rows: 8 })
        ));
    }

    #[test]
    fn test_rejects_small_grid() {
        let config = Config {
            columns: 6,
            rows: 6,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedGrid { columns: 6, rows: 6 })
        );
    }

    #[test]
    fn test_rejects_window_smaller_than_grid() {
        let config = Config {
            window_width: 4,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::WindowTooSmall { .. })));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let config = Config {
            scale: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroScale)));
    }
}
