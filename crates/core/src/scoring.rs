//! Scoring module - line clear points, drop bonuses, levels and gravity speed
//!
//! Rules:
//! - A lock clearing `n` rows scores `LINE_SCORES[n] * level` (level starts at 1).
//! - Every 10 cleared lines raise the level by one; the level never drops.
//! - Gravity interval is `max(100ms, 1000ms * 0.9^(level - 1))`.
//! - Soft drop pays 1 point per row, hard drop 2 points per row.

use std::time::Duration;

use crate::types::{
    FALL_DECAY, HARD_DROP_POINTS, INITIAL_FALL_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS,
    SOFT_DROP_POINTS, STARTING_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (0-4)
/// level: current level (1-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows.saturating_mul(HARD_DROP_POINTS)
    } else {
        rows.saturating_mul(SOFT_DROP_POINTS)
    }
}

/// Level for a total number of cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Gravity interval for a level, floored at `MIN_FALL_MS`
pub fn fall_interval_for_level(level: u32) -> Duration {
    let steps = level.saturating_sub(STARTING_LEVEL).min(i32::MAX as u32) as i32;
    let secs = (INITIAL_FALL_MS as f64 / 1000.0) * FALL_DECAY.powi(steps);
    Duration::from_secs_f64(secs).max(Duration::from_millis(MIN_FALL_MS as u64))
}

/// What a single lock contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines: usize,
    pub points: u32,
    pub leveled_up: bool,
}

/// Score, line total, level and the derived gravity interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoring {
    score: u32,
    lines: u32,
    level: u32,
    fall_interval: Duration,
}

impl Scoring {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: STARTING_LEVEL,
            fall_interval: fall_interval_for_level(STARTING_LEVEL),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Add drop bonus points
    pub fn add_drop(&mut self, rows: u32, is_hard_drop: bool) {
        self.score = self.score.saturating_add(drop_score(rows, is_hard_drop));
    }

    /// Account for a lock that cleared `lines` rows.
    ///
    /// Points use the level in effect before the clear; the level and fall
    /// interval are then recomputed from the new line total.
    pub fn record_clear(&mut self, lines: usize) -> ClearResult {
        if lines == 0 {
            return ClearResult::default();
        }

        let points = line_clear_score(lines, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines as u32);

        let new_level = level_for_lines(self.lines).max(self.level);
        let leveled_up = new_level > self.level;
        if leveled_up {
            self.level = new_level;
            self.fall_interval = fall_interval_for_level(new_level);
        }

        ClearResult {
            lines,
            points,
            leveled_up,
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new()
    }
}
