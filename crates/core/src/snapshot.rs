use serde::{Deserialize, Serialize};

use crate::types::{Cell, GameStatus, Player};

/// Owned, render-ready copy of a classic game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major cells, top row first.
    pub board: Vec<Cell>,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<(usize, usize)>,
    pub winning_cells: Vec<(usize, usize)>,
    pub move_count: usize,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.board.get(row * self.cols + col).copied()
    }

    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        self.winning_cells.contains(&(row, col))
    }

    pub fn playable(&self) -> bool {
        !self.status.is_over()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            board: Vec::new(),
            current_player: Player::A,
            status: GameStatus::InProgress,
            last_move: None,
            winning_cells: Vec::new(),
            move_count: 0,
        }
    }
}
