//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, pieces, RNG, and scoring.
//! It handles gravity timing, piece movement, rotation, line clears, and the
//! Running / Paused / GameOver lifecycle.

use std::time::Duration;

use tracing::{debug, info};

use crate::grid::Grid;
use crate::pieces::{try_rotate, Piece};
use crate::rng::{PieceGenerator, Randomizer};
use crate::scoring::Scoring;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Falling piece; `None` once the game is over.
    active: Option<Piece>,
    /// Kind that spawns after the current piece locks.
    preview: PieceKind,
    generator: PieceGenerator,
    scoring: Scoring,
    phase: Phase,
    /// Time since the last gravity step or lock.
    fall_accumulator: Duration,
    /// Monotonic episode id (increments on restart).
    episode: u32,
    /// Number of pieces that have spawned successfully this episode.
    pieces_spawned: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and uniform piece selection
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(seed, Randomizer::default())
    }

    /// Create a new game with an explicit piece selection policy
    pub fn with_randomizer(seed: u32, randomizer: Randomizer) -> Self {
        Self::from_grid(seed, randomizer, Grid::new())
    }

    /// Start a game on a prepared grid.
    ///
    /// If the first piece cannot be placed the game starts in `GameOver`.
    pub fn from_grid(seed: u32, randomizer: Randomizer, grid: Grid) -> Self {
        Self::start_with(PieceGenerator::new(seed, randomizer), grid, 0)
    }

    fn start_with(mut generator: PieceGenerator, grid: Grid, episode: u32) -> Self {
        let first = generator.draw();
        let preview = generator.draw();
        let mut state = Self {
            grid,
            active: None,
            preview: first,
            generator,
            scoring: Scoring::new(),
            phase: Phase::Running,
            fall_accumulator: Duration::ZERO,
            episode,
            pieces_spawned: 0,
        };
        state.place_new_piece(first, preview);
        info!(
            episode,
            randomizer = state.generator.randomizer().as_str(),
            "game started"
        );
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn fall_interval(&self) -> Duration {
        self.scoring.fall_interval()
    }

    pub fn fall_accumulator(&self) -> Duration {
        self.fall_accumulator
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn preview(&self) -> PieceKind {
        self.preview
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.active;
        out.ghost_y = self.ghost_y();
        out.preview = self.preview;
        out.phase = self.phase;
        out.episode = self.episode;
        out.score = self.scoring.score();
        out.level = self.scoring.level();
        out.lines = self.scoring.lines();
        out.fall_interval_ms = self.scoring.fall_interval().as_millis() as u32;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Make `kind` the active piece at spawn and `next` the preview.
    ///
    /// Enters `GameOver` (with no active piece) if the spawn placement is blocked.
    fn place_new_piece(&mut self, kind: PieceKind, next: PieceKind) -> bool {
        self.preview = next;
        let piece = Piece::new(kind);
        if !self.grid.is_valid(&piece, 0, 0, None) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                score = self.scoring.score(),
                lines = self.scoring.lines(),
                level = self.scoring.level(),
                kind = kind.as_str(),
                "spawn blocked, game over"
            );
            return false;
        }
        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    /// Promote the preview to active and draw a new preview
    fn spawn_next(&mut self) -> bool {
        let kind = self.preview;
        let next = self.generator.draw();
        self.place_new_piece(kind, next)
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if !self.grid.is_valid(active, dx, dy, None) {
            return false;
        }
        active.move_by(dx, dy);
        true
    }

    /// Try to rotate the active piece, resolving collisions with wall kicks.
    ///
    /// On rejection the piece is left exactly as it was.
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let piece = *active;
        let grid = &self.grid;
        let Some((rotation, (dx, dy))) = try_rotate(&piece, clockwise, |dx, dy, rotation| {
            grid.is_valid(&piece, dx, dy, Some(rotation))
        }) else {
            return false;
        };

        if (dx, dy) != (0, 0) {
            debug!(kind = active.kind.as_str(), dx, dy, "wall kick applied");
        }
        active.rotation = rotation;
        active.move_by(dx, dy);
        true
    }

    /// Move the active piece down one row, scoring the soft drop bonus
    fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.scoring.add_drop(1, false);
        }
        moved
    }

    /// Hard drop the active piece to the bottom and lock it.
    ///
    /// Returns the number of rows traveled.
    fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };

        let mut drop_distance: u32 = 0;
        while self.grid.is_valid(active, 0, 1, None) {
            active.move_by(0, 1);
            drop_distance += 1;
        }

        self.scoring.add_drop(drop_distance, true);
        self.lock_piece();
        drop_distance
    }

    /// Lock the active piece onto the grid, clear rows, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.grid.commit(&active);
        let cleared = self.grid.clear_full_rows();
        let result = self.scoring.record_clear(cleared);
        self.fall_accumulator = Duration::ZERO;

        debug!(
            kind = active.kind.as_str(),
            x = active.x,
            y = active.y,
            lines_cleared = cleared,
            points = result.points,
            "piece locked"
        );
        if result.leveled_up {
            info!(
                level = self.scoring.level(),
                interval_ms = self.scoring.fall_interval().as_millis() as u64,
                "level up"
            );
        }

        self.spawn_next();
    }

    /// Calculate the row the active piece would land on (for the landing shadow)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut drop_distance: i8 = 0;
        while self.grid.is_valid(&active, 0, drop_distance + 1, None) {
            drop_distance += 1;
        }
        Some(active.y + drop_distance)
    }

    /// Advance gravity by `elapsed` wall-clock time.
    ///
    /// At most one gravity step (a one-row fall or a lock) happens per call,
    /// however much time has passed. Returns whether a step happened.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.fall_accumulator = self.fall_accumulator.saturating_add(elapsed);
        if self.fall_accumulator < self.scoring.fall_interval() {
            return false;
        }
        self.fall_accumulator = Duration::ZERO;

        if self.grid.is_valid(&active, 0, 1, None) {
            self.try_move(0, 1);
        } else {
            self.lock_piece();
        }
        self.debug_check_invariants();
        true
    }

    fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => return false,
        };
        debug!(phase = self.phase.as_str(), "pause toggled");
        true
    }

    /// Throw away the current game and start a fresh one.
    ///
    /// The piece sequence continues from the current generator state.
    pub fn restart(&mut self) {
        let generator = self.generator.clone();
        let episode = self.episode.wrapping_add(1);
        *self = Self::start_with(generator, Grid::new(), episode);
    }

    /// Apply a game action. Returns whether it changed anything.
    ///
    /// Only `Pause` and `Restart` do anything outside `Running`; `Quit`
    /// belongs to the loop driver and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::Pause => self.toggle_pause(),
            // Restart is honored in every phase, Paused included.
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => false,
            _ if self.phase != Phase::Running => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
        };
        self.debug_check_invariants();
        changed
    }

    fn debug_check_invariants(&self) {
        if let Some(active) = &self.active {
            debug_assert!(
                self.grid.is_valid(active, 0, 0, None),
                "active piece left the valid region: {:?}",
                active
            );
        }
        debug_assert_eq!(
            self.active.is_none(),
            self.phase == Phase::GameOver,
            "active piece must exist exactly while the game is not over"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, GRID_HEIGHT, GRID_WIDTH};

    const ONE_SECOND: Duration = Duration::from_secs(1);

    /// Fresh game whose active piece is replaced by `piece`.
    fn state_with(piece: Piece) -> GameState {
        let mut state = GameState::new(12345);
        state.active = Some(piece);
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.fall_interval(), ONE_SECOND);
        assert_eq!(state.episode, 0);
        assert_eq!(state.pieces_spawned, 1);

        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (3, 0));
        assert_eq!(active.rotation, Rotation::North);
    }

    #[test]
    fn preview_becomes_active_after_lock() {
        let mut state = GameState::new(12345);
        let next = state.preview;

        state.hard_drop();

        assert!(!state.game_over());
        assert_eq!(state.active.unwrap().kind, next);
        assert_eq!(state.pieces_spawned, 2);
    }

    #[test]
    fn same_seed_same_piece_sequence() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        for _ in 0..5 {
            assert_eq!(a.active.map(|p| p.kind), b.active.map(|p| p.kind));
            assert_eq!(a.preview, b.preview);
            a.hard_drop();
            b.hard_drop();
        }
    }

    #[test]
    fn test_try_move() {
        let mut state = state_with(Piece::new(PieceKind::T));

        assert!(state.try_move(1, 0));
        assert_eq!(state.active.unwrap().x, 4);
        assert!(state.try_move(-1, 0));
        assert_eq!(state.active.unwrap().x, 3);

        // T spawn occupies row 1 at the top; it cannot go up past row 0.
        assert!(state.try_move(0, -1));
        assert!(!state.try_move(0, -1));
    }

    #[test]
    fn test_try_move_stops_at_wall() {
        let mut state = state_with(Piece::new(PieceKind::O));

        let mut moved = 0;
        for _ in 0..10 {
            if state.apply_action(GameAction::MoveLeft) {
                moved += 1;
            }
        }
        // O occupies box columns 1-2, so the origin can reach x = -1.
        assert_eq!(moved, 4);
        assert_eq!(state.active.unwrap().x, -1);
    }

    #[test]
    fn four_rotations_restore_piece_without_kicks() {
        for kind in PieceKind::ALL {
            let start = Piece::at(kind, Rotation::North, 3, 8);
            let mut state = state_with(start);
            for _ in 0..4 {
                assert!(state.try_rotate(true));
            }
            assert_eq!(state.active, Some(start), "{:?}", kind);
        }
    }

    #[test]
    fn rotation_kicks_off_the_left_wall() {
        // Vertical I in column 0; its horizontal state needs one column to the right.
        let mut state = state_with(Piece::at(PieceKind::I, Rotation::West, -1, 5));

        assert!(state.apply_action(GameAction::Rotate));
        let active = state.active.unwrap();
        assert_eq!(active.rotation, Rotation::North);
        assert_eq!((active.x, active.y), (0, 5));
    }

    #[test]
    fn rotation_kicks_up_off_the_floor() {
        // Vertical I standing on the floor in column 5. East -> South lays the
        // bar on row 18; fill that row (except the I's own column) so only
        // the upward kick leaves room.
        let mut state = state_with(Piece::at(PieceKind::I, Rotation::East, 3, 16));
        for x in 0..GRID_WIDTH as i8 {
            if x != 5 {
                state.grid.set(x, 18, Some(PieceKind::O));
            }
        }
        assert!(state.try_rotate(true));
        let active = state.active.unwrap();
        assert_eq!(active.rotation, Rotation::South);
        assert_eq!((active.x, active.y), (3, 15));
    }

    /// Game whose grid is full except for `piece`'s own cells and `open`.
    fn state_in_pocket(piece: Piece, open: &[(i8, i8)]) -> GameState {
        let mut state = state_with(piece);
        let own = piece.cells();
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if !own.contains(&(x, y)) && !open.contains(&(x, y)) {
                    state.grid.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        state
    }

    #[test]
    fn rejected_rotation_leaves_piece_untouched() {
        let piece = Piece::at(PieceKind::T, Rotation::North, 3, 10);
        let mut state = state_in_pocket(piece, &[]);

        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.apply_action(GameAction::RotateCcw));
        assert_eq!(state.active, Some(piece));
    }

    #[test]
    fn rotation_falls_through_to_up_left_kick() {
        // T North at (3,10) covers (4,11) (3,12) (4,12) (5,12). Its East state
        // fits only one column left and one row up: (3,10) (3,11) (4,11) (3,12).
        let piece = Piece::at(PieceKind::T, Rotation::North, 3, 10);
        let mut state = state_in_pocket(piece, &[(3, 10), (3, 11)]);

        assert!(state.apply_action(GameAction::Rotate));
        let active = state.active.unwrap();
        assert_eq!(active.rotation, Rotation::East);
        assert_eq!((active.x, active.y), (2, 9));
    }

    #[test]
    fn rotation_falls_through_to_up_right_kick() {
        // Same T, but the only room for East is one column right and one up:
        // (5,10) (5,11) (6,11) (5,12). Every earlier kick hits a filled cell.
        let piece = Piece::at(PieceKind::T, Rotation::North, 3, 10);
        let mut state = state_in_pocket(piece, &[(5, 10), (5, 11), (6, 11)]);

        assert!(state.apply_action(GameAction::Rotate));
        let active = state.active.unwrap();
        assert_eq!(active.rotation, Rotation::East);
        assert_eq!((active.x, active.y), (4, 9));
    }

    #[test]
    fn paused_game_only_answers_pause_and_restart() {
        let mut state = state_with(Piece::new(PieceKind::I));
        state.apply_action(GameAction::Pause);
        let before = state.snapshot();

        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Rotate,
            GameAction::RotateCcw,
            GameAction::Quit,
        ] {
            assert!(!state.apply_action(action), "{:?}", action);
        }
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.grid.occupied_count(), 0);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.episode(), 1);
    }

    #[test]
    fn test_hard_drop_scores_two_per_row() {
        let mut state = state_with(Piece::new(PieceKind::T));

        // T spawn bottom row is box row 2, so it can fall 17 rows.
        assert_eq!(state.hard_drop(), 17);
        assert_eq!(state.score(), 34);
        assert_eq!(state.grid.occupied_count(), 4);
        assert_eq!(state.grid.get(4, 19), Some(Some(PieceKind::T)));
        assert!(state.active.is_some());
    }

    #[test]
    fn test_soft_drop_scoring() {
        let mut state = state_with(Piece::new(PieceKind::O));

        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.score(), 2);
        assert_eq!(state.active.unwrap().y, 2);

        // At the floor a soft drop is rejected and pays nothing.
        state.active = Some(Piece::at(PieceKind::O, Rotation::North, 3, 17));
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.score(), 2);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = state_with(Piece::new(PieceKind::L));

        assert!(!state.tick(Duration::from_millis(999)));
        assert_eq!(state.active.unwrap().y, 0);

        assert!(state.tick(Duration::from_millis(1)));
        assert_eq!(state.active.unwrap().y, 1);
        assert_eq!(state.fall_accumulator, Duration::ZERO);
    }

    #[test]
    fn tick_steps_once_after_a_stall() {
        let mut state = state_with(Piece::new(PieceKind::L));

        assert!(state.tick(Duration::from_secs(30)));
        assert_eq!(state.active.unwrap().y, 1);
        assert_eq!(state.fall_accumulator, Duration::ZERO);
    }

    #[test]
    fn gravity_locks_grounded_piece() {
        let mut state = state_with(Piece::at(PieceKind::O, Rotation::North, 3, 17));
        let next = state.preview;

        assert!(state.tick(ONE_SECOND));
        assert_eq!(state.grid.occupied_count(), 4);
        assert_eq!(state.active.unwrap().kind, next);
        assert_eq!(state.active.unwrap().y, 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn single_line_clear_at_level_one_scores_100() {
        // I on row 19 columns 6-9 completes the row.
        let mut state = state_with(Piece::at(PieceKind::I, Rotation::North, 6, 18));
        for x in 0..6 {
            state.grid.set(x, 19, Some(PieceKind::J));
        }
        state.grid.set(0, 18, Some(PieceKind::S));

        state.lock_piece();

        assert_eq!(state.score(), 100);
        assert_eq!(state.lines(), 1);
        assert_eq!(state.grid.occupied_count(), 1);
        assert_eq!(state.grid.get(0, 19), Some(Some(PieceKind::S)));
    }

    #[test]
    fn tetris_at_level_two_scores_1600() {
        let mut state = state_with(Piece::at(PieceKind::I, Rotation::West, 8, 16));
        for _ in 0..10 {
            state.scoring.record_clear(1);
        }
        assert_eq!(state.level(), 2);
        let before = state.score();

        for y in 16..20 {
            for x in 0..9 {
                state.grid.set(x, y, Some(PieceKind::L));
            }
        }
        state.lock_piece();

        assert_eq!(state.score() - before, 1600);
        assert_eq!(state.lines(), 14);
        assert_eq!(state.grid.occupied_count(), 0);
    }

    #[test]
    fn lock_resets_fall_accumulator() {
        let mut state = GameState::new(5);
        state.tick(Duration::from_millis(600));
        assert_eq!(state.fall_accumulator, Duration::from_millis(600));

        state.apply_action(GameAction::HardDrop);
        assert_eq!(state.fall_accumulator, Duration::ZERO);
    }

    #[test]
    fn blocked_spawn_ends_the_game_on_next_lock() {
        let mut state = state_with(Piece::at(PieceKind::O, Rotation::North, -1, 17));

        // Every spawn shape has a cell on box row 1 within columns 3-6.
        for x in 3..7 {
            state.grid_mut().set(x, 1, Some(PieceKind::Z));
        }

        state.lock_piece();

        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.active.is_none());
        assert!(state.ghost_y().is_none());
    }

    #[test]
    fn game_over_ignores_everything_but_restart() {
        let mut state = state_with(Piece::at(PieceKind::O, Rotation::North, -1, 17));
        for x in 3..7 {
            state.grid.set(x, 1, Some(PieceKind::Z));
        }
        state.lock_piece();
        assert!(state.game_over());

        let score = state.score();
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Rotate,
            GameAction::RotateCcw,
            GameAction::Pause,
            GameAction::Quit,
        ] {
            assert!(!state.apply_action(action), "{:?}", action);
        }
        assert!(!state.tick(Duration::from_secs(5)));
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.score(), score);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.episode(), 1);
        assert_eq!(state.grid.occupied_count(), 0);
        assert_eq!(state.score(), 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn from_grid_with_blocked_spawn_starts_over() {
        let grid = Grid::from_rows(&["IIIIIIIII."; 20]);
        let state = GameState::from_grid(3, Randomizer::SevenBag, grid);
        assert!(state.game_over());
        assert!(state.active.is_none());
        assert_eq!(state.pieces_spawned, 0);
    }

    #[test]
    fn test_pause_stops_game() {
        let mut state = state_with(Piece::new(PieceKind::J));
        state.tick(Duration::from_millis(300));

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Paused);

        let before = state.active;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.tick(Duration::from_secs(10)));
        assert_eq!(state.active, before);
        assert_eq!(state.fall_accumulator, Duration::from_millis(300));

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Running);
        assert!(state.tick(Duration::from_millis(700)));
    }

    #[test]
    fn level_and_interval_are_monotonic_over_a_long_game() {
        let mut state = GameState::new(2024);
        let mut rng = crate::rng::SimpleRng::new(9);
        let mut last = (state.level(), state.fall_interval(), state.score(), state.lines());

        for _ in 0..2_000 {
            if state.game_over() {
                break;
            }
            let action = match rng.next_range(5) {
                0 => GameAction::MoveLeft,
                1 => GameAction::MoveRight,
                2 => GameAction::Rotate,
                3 => GameAction::SoftDrop,
                _ => GameAction::HardDrop,
            };
            state.apply_action(action);
            state.tick(Duration::from_millis(250));

            let now = (state.level(), state.fall_interval(), state.score(), state.lines());
            assert!(now.0 >= last.0);
            assert!(now.1 <= last.1);
            assert!(now.2 >= last.2);
            assert!(now.3 >= last.3);
            last = now;
        }
    }

    #[test]
    fn test_ghost_y() {
        let state = state_with(Piece::new(PieceKind::T));
        assert_eq!(state.ghost_y(), Some(17));
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut state = state_with(Piece::new(PieceKind::S));
        state.grid.set(0, 19, Some(PieceKind::I));
        state.apply_action(GameAction::Pause);

        let snap = state.snapshot();
        assert_eq!(snap.grid[19][0], Some(PieceKind::I));
        assert_eq!(snap.active, state.active);
        assert_eq!(snap.preview, state.preview);
        assert_eq!(snap.phase, Phase::Paused);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.fall_interval_ms, 1000);
        assert_eq!(snap.ghost_y, Some(17));
    }
}
