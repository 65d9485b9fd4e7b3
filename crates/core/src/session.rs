//! Session store - state that outlives a single board
//!
//! Holds the configured settings, the in-memory match history and the
//! rotation deciding who starts the next classic game.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::BoardEngine;
use crate::error::EngineError;
use crate::settings::Settings;
use crate::types::{MatchResult, Player};

/// One finished classic game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub result: MatchResult,
}

impl HistoryEntry {
    /// Text shown in the history list.
    pub fn label(&self) -> String {
        match self.result {
            MatchResult::Winner(p) => format!("Winner: {}", p.color_name()),
            MatchResult::Draw => "Draw".to_string(),
        }
    }
}

/// Ordered match log, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Per-result counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: MatchResult) {
        self.entries.push(HistoryEntry { result });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn tally(&self) -> Tally {
        self.entries.iter().fold(Tally::default(), |mut t, e| {
            match e.result {
                MatchResult::Winner(Player::A) => t.a_wins += 1,
                MatchResult::Winner(Player::B) => t.b_wins += 1,
                MatchResult::Draw => t.draws += 1,
            }
            t
        })
    }
}

/// Who starts the next classic game.
///
/// The first game goes to `Player::A`; each new game hands the opening move to
/// the other player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarterRotation {
    next: Player,
}

impl Default for StarterRotation {
    fn default() -> Self {
        Self { next: Player::A }
    }
}

impl StarterRotation {
    pub fn peek(&self) -> Player {
        self.next
    }

    /// Take the starter for a new game and rotate.
    pub fn take(&mut self) -> Player {
        let p = self.next;
        self.next = p.other();
        p
    }
}

/// Settings, history and starter rotation for one process lifetime.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    settings: Settings,
    history: History,
    starters: StarterRotation,
}

impl SessionStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        info!(
            rows = settings.rows,
            cols = settings.cols,
            music = settings.music_enabled,
            "settings saved"
        );
        self.settings = settings;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        info!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }

    /// Append a finished game to the history.
    pub fn record_result(&mut self, result: MatchResult) {
        info!(result = result.as_str(), "result recorded");
        self.history.record(result);
    }

    pub fn starters(&self) -> &StarterRotation {
        &self.starters
    }

    /// A fresh engine sized from the settings, started by the next player in rotation.
    pub fn new_engine(&mut self) -> Result<BoardEngine, EngineError> {
        let starting = self.starters.take();
        BoardEngine::new(self.settings.rows, self.settings.cols, starting)
    }

    /// Clear `engine` for another game, keeping its shape, and rotate the starter.
    pub fn restart(&mut self, engine: &mut BoardEngine) {
        engine.reset(self.starters.take());
    }
}
