//! termtris (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, tests and
//! benches can write `termtris::{core, engine, input, term, types}`.

pub mod cli;

pub use termtris_core as core;
pub use termtris_engine as engine;
pub use termtris_input as input;
pub use termtris_term as term;
pub use termtris_types as types;
