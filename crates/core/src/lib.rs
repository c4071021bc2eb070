//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminals or I/O beyond `tracing` events, so the
//! same seed always produces the same game.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield with placement checks and line clearing
//! - [`game_state`]: Complete game state including active piece, scoring, timing
//! - [`pieces`]: Tetromino shape tables and wall-kick rotation
//! - [`rng`]: Seeded piece generation (uniform or 7-bag)
//! - [`scoring`]: Line clear and drop points, levels, gravity interval
//! - [`snapshot`]: Plain-data view of a game for rendering
//!
//! # Example
//!
//! ```
//! use termtris_core::GameState;
//! use termtris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity starts at one row per second and shortens by 10% per level, down
//! to 100ms. Call [`GameState::tick`](game_state::GameState::tick) every frame
//! with the elapsed wall-clock time.

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use termtris_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use pieces::{get_shape, try_rotate, Piece};
pub use rng::{PieceGenerator, Randomizer, SimpleRng};
pub use scoring::{drop_score, fall_interval_for_level, line_clear_score, ClearResult, Scoring};
pub use snapshot::GameSnapshot;
