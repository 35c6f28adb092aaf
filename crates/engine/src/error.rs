//! Error types for board construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("only an 8x8 grid is supported, got {columns}x{rows}")]
    UnsupportedGrid { columns: i32, rows: i32 },

    #[error("window {width}x{height} is too small for a {columns}x{rows} grid")]
    WindowTooSmall {
        width: i32,
        height: i32,
        columns: i32,
        rows: i32,
    },

    #[error("pixel scale must be positive")]
    ZeroScale,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
