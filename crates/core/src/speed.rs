//! Speed mode - a timed "tap the ball" round
//!
//! Balls spawn at random cells once per spawn interval and vanish after their
//! lifetime. Tapping a ball scores a point. There is no win detection; the
//! round ends when the countdown reaches zero.
//!
//! Time only moves through [`SpeedRound::tick`], so the round is fully
//! deterministic for a given seed and tick sequence.

use tracing::{debug, info};

use crate::error::EngineError;
use crate::rng::SimpleRng;
use crate::types::{BALL_LIFETIME_MS, SPAWN_INTERVAL_MS, SPEED_ROUND_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPhase {
    /// Rules shown, waiting for start
    Ready,
    Running,
    /// Countdown reached zero
    Finished,
}

#[derive(Debug, Clone)]
pub struct SpeedRound {
    rows: usize,
    cols: usize,
    /// Age in ms of the ball in each cell, row-major.
    balls: Vec<Option<u32>>,
    phase: SpeedPhase,
    remaining_secs: u32,
    second_timer_ms: u32,
    spawn_timer_ms: u32,
    score: u32,
    rng: SimpleRng,
}

impl SpeedRound {
    pub fn new(rows: usize, cols: usize, seed: u32) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            balls: vec![None; rows * cols],
            phase: SpeedPhase::Ready,
            remaining_secs: SPEED_ROUND_SECS,
            second_timer_ms: 0,
            spawn_timer_ms: 0,
            score: 0,
            rng: SimpleRng::new(seed),
        })
    }

    pub fn start(&mut self) {
        if self.phase == SpeedPhase::Ready {
            self.phase = SpeedPhase::Running;
            info!(rows = self.rows, cols = self.cols, "speed round started");
        }
    }

    /// Back to `Ready` with an empty board, full clock and zero score.
    ///
    /// The RNG keeps running so the next round differs.
    pub fn reset(&mut self) {
        self.balls.fill(None);
        self.phase = SpeedPhase::Ready;
        self.remaining_secs = SPEED_ROUND_SECS;
        self.second_timer_ms = 0;
        self.spawn_timer_ms = 0;
        self.score = 0;
    }

    /// Advance the round clock. Returns true if anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != SpeedPhase::Running {
            return false;
        }
        let mut changed = false;

        // Countdown
        self.second_timer_ms += elapsed_ms;
        while self.second_timer_ms >= 1000 && self.remaining_secs > 0 {
            self.second_timer_ms -= 1000;
            self.remaining_secs -= 1;
            changed = true;
        }
        if self.remaining_secs == 0 {
            self.finish();
            return true;
        }

        // Expire old balls
        for slot in &mut self.balls {
            if let Some(age) = slot {
                *age = age.saturating_add(elapsed_ms);
                if *age >= BALL_LIFETIME_MS {
                    *slot = None;
                    changed = true;
                }
            }
        }

        // Spawn
        self.spawn_timer_ms += elapsed_ms;
        while self.spawn_timer_ms >= SPAWN_INTERVAL_MS {
            self.spawn_timer_ms -= SPAWN_INTERVAL_MS;
            changed |= self.spawn();
        }

        changed
    }

    /// Pick a random cell; place a ball if it is empty.
    fn spawn(&mut self) -> bool {
        let idx = self.rng.next_index(self.balls.len());
        if self.balls[idx].is_none() {
            self.balls[idx] = Some(0);
            debug!(row = idx / self.cols, col = idx % self.cols, "ball spawned");
            true
        } else {
            false
        }
    }

    fn finish(&mut self) {
        self.phase = SpeedPhase::Finished;
        self.balls.fill(None);
        info!(score = self.score, "speed round finished");
    }

    /// Tap a cell. Scores and removes the ball if there is one.
    pub fn tap(&mut self, row: usize, col: usize) -> bool {
        if self.phase != SpeedPhase::Running || row >= self.rows || col >= self.cols {
            return false;
        }
        let slot = &mut self.balls[row * self.cols + col];
        if slot.take().is_some() {
            self.score += 1;
            true
        } else {
            false
        }
    }

    pub fn has_ball(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.balls[row * self.cols + col].is_some()
    }

    pub fn ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_some()).count()
    }

    pub fn phase(&self) -> SpeedPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[cfg(test)]
    fn place_ball(&mut self, row: usize, col: usize) {
        self.balls[row * self.cols + col] = Some(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(rows: usize, cols: usize) -> SpeedRound {
        let mut r = SpeedRound::new(rows, cols, 12345).unwrap();
        r.start();
        r
    }

    #[test]
    fn new_round_is_ready() {
        let r = SpeedRound::new(6, 7, 1).unwrap();
        assert_eq!(r.phase(), SpeedPhase::Ready);
        assert_eq!(r.remaining_secs(), 60);
        assert_eq!(r.score(), 0);
        assert_eq!(r.ball_count(), 0);
        assert!(SpeedRound::new(0, 7, 1).is_err());
    }

    #[test]
    fn ready_round_ignores_ticks_and_taps() {
        let mut r = SpeedRound::new(2, 2, 1).unwrap();
        assert!(!r.tick(5000));
        assert_eq!(r.remaining_secs(), 60);
        assert!(!r.tap(0, 0));
    }

    #[test]
    fn first_spawn_after_one_interval() {
        let mut r = running(6, 7);
        r.tick(999);
        assert_eq!(r.ball_count(), 0);
        r.tick(1);
        assert_eq!(r.ball_count(), 1);
        assert_eq!(r.remaining_secs(), 59);
    }

    #[test]
    fn ball_expires_after_lifetime() {
        let mut r = running(3, 3);
        // Offset from the spawn schedule so no spawn lands on the final tick.
        r.tick(500);
        r.place_ball(1, 1);
        r.tick(1999);
        assert!(r.has_ball(1, 1));
        r.tick(1);
        assert!(!r.has_ball(1, 1));
    }

    #[test]
    fn tap_scores_once() {
        let mut r = running(3, 3);
        r.place_ball(0, 2);
        assert!(r.tap(0, 2));
        assert_eq!(r.score(), 1);
        assert!(!r.tap(0, 2));
        assert_eq!(r.score(), 1);
        assert!(!r.tap(5, 5));
    }

    #[test]
    fn single_cell_board_never_double_spawns() {
        let mut r = running(1, 1);
        r.tick(1000);
        assert!(r.has_ball(0, 0));
        // Occupied: the next attempt finds the cell taken.
        r.tick(1000);
        assert_eq!(r.ball_count(), 1);
    }

    #[test]
    fn round_finishes_after_sixty_seconds() {
        let mut r = running(6, 7);
        for _ in 0..(59_000 / 50) {
            r.tick(50);
        }
        assert_eq!(r.phase(), SpeedPhase::Running);
        assert_eq!(r.remaining_secs(), 1);

        r.place_ball(0, 0);
        assert!(r.tap(0, 0));
        let score = r.score();

        for _ in 0..20 {
            r.tick(50);
        }
        assert_eq!(r.phase(), SpeedPhase::Finished);
        assert_eq!(r.remaining_secs(), 0);
        assert_eq!(r.ball_count(), 0);
        assert!(!r.tap(0, 0));
        assert_eq!(r.score(), score);
        assert!(!r.tick(1000));
    }

    #[test]
    fn reset_restores_ready() {
        let mut r = running(2, 2);
        r.place_ball(0, 0);
        r.tap(0, 0);
        r.tick(3000);
        r.reset();
        assert_eq!(r.phase(), SpeedPhase::Ready);
        assert_eq!(r.score(), 0);
        assert_eq!(r.remaining_secs(), 60);
        assert_eq!(r.ball_count(), 0);
    }

    #[test]
    fn same_seed_same_spawns() {
        let mut a = running(6, 7);
        let mut b = running(6, 7);
        for _ in 0..200 {
            a.tick(50);
            b.tick(50);
            for row in 0..6 {
                for col in 0..7 {
                    assert_eq!(a.has_ball(row, col), b.has_ball(row, col));
                }
            }
        }
    }
}
