//! Board engine - the classic game state machine
//!
//! Owns the grid, the player to move and the result. Every call either commits
//! exactly one cell change or changes nothing.
//!
//! The engine is a plain `&mut self` state machine. It is driven from a single
//! thread of control; callers must not mutate it concurrently.

use tracing::{debug, info, instrument};

use crate::board::{Grid, WinningLines};
use crate::error::EngineError;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, GameStatus, MatchResult, Player};

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Landing row.
    pub row: usize,
    pub column: usize,
    /// The player who moved.
    pub player: Player,
    pub status: GameStatus,
    /// Every four-or-longer run through the landing cell (empty unless `status` is a win).
    pub lines: WinningLines,
}

/// Complete classic game state.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    grid: Grid,
    current: Player,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
    winning: WinningLines,
    moves: usize,
}

impl BoardEngine {
    /// Create an engine with an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize, starting: Player) -> Result<Self, EngineError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            grid: Grid::new(rows, cols),
            current: starting,
            status: GameStatus::InProgress,
            last_move: None,
            winning: WinningLines::new(),
            moves: 0,
        })
    }

    /// Re-shape and clear the engine.
    ///
    /// On error the engine is left untouched.
    pub fn initialize(
        &mut self,
        rows: usize,
        cols: usize,
        starting: Player,
    ) -> Result<(), EngineError> {
        *self = Self::new(rows, cols, starting)?;
        Ok(())
    }

    /// Drop a piece for the current player into `column`.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }
        if column >= self.grid.cols() {
            return Err(EngineError::InvalidColumn {
                column,
                cols: self.grid.cols(),
            });
        }
        let row = self
            .grid
            .landing_row(column)
            .ok_or(EngineError::ColumnFull { column })?;

        let player = self.current;
        self.grid.set(row, column, Cell::from(player));
        self.last_move = Some((row, column));
        self.moves += 1;

        let lines = self.grid.winning_lines(row, column);
        let status = if !lines.is_empty() {
            GameStatus::Win(player)
        } else if self.grid.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        self.status = status;
        self.winning = lines.clone();
        match status {
            GameStatus::InProgress => self.current = player.other(),
            GameStatus::Win(p) => info!(winner = p.as_str(), moves = self.moves, "game won"),
            GameStatus::Draw => info!(moves = self.moves, "game drawn"),
        }
        debug!(row, column, ?status, "move applied");

        Ok(MoveOutcome {
            row,
            column,
            player,
            status,
            lines,
        })
    }

    /// Clear the grid, keeping its shape, and hand the first move to `starting`.
    pub fn reset(&mut self, starting: Player) {
        self.grid.clear();
        self.current = starting;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.winning.clear();
        self.moves = 0;
        debug!(starting = starting.as_str(), "board reset");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.status.result()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Winning runs of the finished game (empty otherwise).
    pub fn winning_lines(&self) -> &WinningLines {
        &self.winning
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.board.clear();
        out.board.extend_from_slice(self.grid.cells());
        out.current_player = self.current;
        out.status = self.status;
        out.last_move = self.last_move;
        out.winning_cells.clear();
        for line in &self.winning {
            out.winning_cells.extend(line.cells());
        }
        out.move_count = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), EngineError> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::InvalidDimension { rows, cols });
    }
    Ok(())
}
