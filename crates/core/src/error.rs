//! Error types for the engine and the settings collaborator.
//!
//! Every variant is a recoverable input error. None of them leave state
//! partially mutated.

/// Errors returned by [`crate::BoardEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors returned when validating settings input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Please enter valid values for rows and columns.")]
    Invalid,

    #[error("The maximum limit for rows is {max_rows} and columns is {max_cols}.")]
    TooLarge { max_rows: usize, max_cols: usize },
}
