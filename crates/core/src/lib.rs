//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and session
//! bookkeeping. It has **zero dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: speed rounds are seeded and driven by explicit ticks
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` gravity grid with the outward win scan
//! - [`engine`]: the classic game state machine (moves, turns, results)
//! - [`session`]: settings, match history and starter rotation
//! - [`settings`]: board shape bounds and settings input validation
//! - [`speed`]: the timed speed-mode round
//! - [`rng`]: seedable LCG for speed-mode spawns
//! - [`config`]: environment configuration
//!
//! # Game Rules
//!
//! - A piece dropped into a column lands on the lowest empty cell
//! - Players alternate after every accepted move
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board without a winner is a draw; a win on the last cell is a win
//!
//! # Example
//!
//! ```
//! use connect_four_core::BoardEngine;
//! use connect_four_types::{GameStatus, Player};
//!
//! let mut game = BoardEngine::new(6, 7, Player::A).unwrap();
//! for col in [0, 1, 0, 1, 0, 1] {
//!     game.apply_move(col).unwrap();
//! }
//! let outcome = game.apply_move(0).unwrap();
//! assert_eq!(outcome.row, 2);
//! assert_eq!(outcome.status, GameStatus::Win(Player::A));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod speed;

pub use connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::{Grid, Line, WinningLines};
pub use config::AppConfig;
pub use engine::{BoardEngine, MoveOutcome};
pub use error::{EngineError, SettingsError};
pub use rng::SimpleRng;
pub use session::{History, HistoryEntry, SessionStore, StarterRotation, Tally};
pub use settings::{FormOutcome, Settings, SettingsForm};
pub use snapshot::GameSnapshot;
pub use speed::{SpeedPhase, SpeedRound};
