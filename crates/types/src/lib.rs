//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small conversions, making
//! them usable in any context (engine, session bookkeeping, terminal views).
//!
//! # Board Dimensions
//!
//! The board shape is configured per match:
//!
//! - **Rows**: 1..=10 (`MAX_ROWS`), row 0 is the top, the last row is the floor
//! - **Columns**: 1..=7 (`MAX_COLS`)
//! - **Default**: 6 rows x 7 columns
//!
//! The engine itself accepts any positive shape; the bounds are enforced by the
//! settings screen only.
//!
//! # Speed Mode Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Main loop timestep |
//! | `SPEED_ROUND_SECS` | 60 | Length of one speed round |
//! | `SPAWN_INTERVAL_MS` | 1000 | Time between spawn attempts |
//! | `BALL_LIFETIME_MS` | 2000 | Time a ball stays on the board |
//!
//! # Examples
//!
//! ```
//! use connect_four_types::{Cell, MatchResult, Player, WIN_LENGTH};
//!
//! let p = Player::A;
//! assert_eq!(p.other(), Player::B);
//! assert_eq!(Cell::from(p), Cell::PlayerA);
//! assert_eq!(MatchResult::Winner(Player::B).as_str(), "PlayerB");
//! assert_eq!(WIN_LENGTH, 4);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of contiguous pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 6;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 7;

/// Largest row count the settings screen accepts.
pub const MAX_ROWS: usize = 10;

/// Largest column count the settings screen accepts.
pub const MAX_COLS: usize = 7;

/// Main loop timestep in milliseconds.
pub const TICK_MS: u32 = 50;

/// Length of a speed round in seconds.
pub const SPEED_ROUND_SECS: u32 = 60;

/// Interval between ball spawn attempts in speed mode.
pub const SPAWN_INTERVAL_MS: u32 = 1000;

/// How long a spawned ball stays on the board.
pub const BALL_LIFETIME_MS: u32 = 2000;

/// One of the two players.
///
/// `A` plays blue and `B` plays red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "PlayerA")]
    A,
    #[serde(rename = "PlayerB")]
    B,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Literal used in history notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::A => "PlayerA",
            Player::B => "PlayerB",
        }
    }

    /// Display color name.
    pub fn color_name(&self) -> &'static str {
        match self {
            Player::A => "Blue",
            Player::B => "Red",
        }
    }
}

/// A cell on the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::A),
            Cell::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Self {
        match p {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }
}

/// Outcome of a finished classic game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MatchResult {
    Winner(Player),
    Draw,
}

impl MatchResult {
    /// History literal: `"PlayerA"`, `"PlayerB"` or `"Draw"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Winner(p) => p.as_str(),
            MatchResult::Draw => "Draw",
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchResult::Winner(p) => Some(*p),
            MatchResult::Draw => None,
        }
    }
}

impl From<MatchResult> for String {
    fn from(r: MatchResult) -> Self {
        r.as_str().to_string()
    }
}

impl FromStr for MatchResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PlayerA" => Ok(MatchResult::Winner(Player::A)),
            "PlayerB" => Ok(MatchResult::Winner(Player::B)),
            "Draw" => Ok(MatchResult::Draw),
            _ => Err(format!("unknown match result: {s}")),
        }
    }
}

impl TryFrom<String> for MatchResult {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Game status reported after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The final result, or `None` while the game continues.
    pub fn result(&self) -> Option<MatchResult> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Win(p) => Some(MatchResult::Winner(*p)),
            GameStatus::Draw => Some(MatchResult::Draw),
        }
    }
}

/// The four scan axes used for win detection.
///
/// Each axis is a `(d_row, d_col)` step; the scan walks both the step and its
/// negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (↘).
    DiagonalDown,
    /// Top-right to bottom-left (↙).
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    pub fn step(&self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NormalGame,
    SpeedMode,
    History,
    Settings,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::NormalGame,
        MenuItem::SpeedMode,
        MenuItem::History,
        MenuItem::Settings,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NormalGame => "NORMAL GAME",
            MenuItem::SpeedMode => "SPEED MODE",
            MenuItem::History => "HISTORY",
            MenuItem::Settings => "SETTINGS",
            MenuItem::Quit => "QUIT",
        }
    }
}

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    /// Jump straight to an entry (hotkeys).
    Open(MenuItem),
}

/// Classic game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassicAction {
    /// Move the column cursor left
    CursorLeft,
    /// Move the column cursor right
    CursorRight,
    /// Drop into the cursor column
    Drop,
    /// Drop directly into a column (0-based)
    DropAt(usize),
    /// Start a new game (after a result, or abandoning the current one)
    Restart,
    /// Dismiss the rules overlay
    Dismiss,
    /// Back to the menu
    Back,
}

/// Four-way cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Speed mode actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedAction {
    Move(Direction),
    Tap,
    Start,
    Restart,
    Back,
}

/// Settings screen fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Rows,
    Cols,
    Music,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::Rows => SettingsField::Cols,
            SettingsField::Cols => SettingsField::Music,
            SettingsField::Music => SettingsField::Rows,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SettingsField::Rows => SettingsField::Music,
            SettingsField::Cols => SettingsField::Rows,
            SettingsField::Music => SettingsField::Cols,
        }
    }
}

/// Settings screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    NextField,
    PrevField,
    Input(char),
    Backspace,
    ToggleMusic,
    ResetDefaults,
    Save,
    Back,
}

/// History screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Clear,
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_other_is_an_involution() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
        assert_eq!(Player::A.other().other(), Player::A);
    }

    #[test]
    fn cell_owner() {
        assert_eq!(Cell::from(Player::A).owner(), Some(Player::A));
        assert_eq!(Cell::PlayerB.owner(), Some(Player::B));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn match_result_uses_history_literals() {
        let json = serde_json::to_string(&MatchResult::Winner(Player::A)).unwrap();
        assert_eq!(json, "\"PlayerA\"");
        let draw: MatchResult = serde_json::from_str("\"Draw\"").unwrap();
        assert_eq!(draw, MatchResult::Draw);
        assert!(serde_json::from_str::<MatchResult>("\"Green\"").is_err());
    }

    #[test]
    fn match_result_parses_from_str() {
        assert_eq!("PlayerB".parse::<MatchResult>(), Ok(MatchResult::Winner(Player::B)));
        assert_eq!("Draw".parse::<MatchResult>(), Ok(MatchResult::Draw));
        assert!("playerA".parse::<MatchResult>().is_err());
    }

    #[test]
    fn game_status_result() {
        assert_eq!(GameStatus::InProgress.result(), None);
        assert_eq!(
            GameStatus::Win(Player::B).result(),
            Some(MatchResult::Winner(Player::B))
        );
        assert!(GameStatus::Draw.is_over());
    }

    #[test]
    fn settings_field_cycle() {
        let f = SettingsField::Rows;
        assert_eq!(f.next().next().next(), f);
        assert_eq!(f.prev(), SettingsField::Music);
    }
}
