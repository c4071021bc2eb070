//! Engine crate: the frame loop and the seams it talks through.
//!
//! The loop owns a [`GameState`](termtris_core::GameState) and drives it from
//! three collaborators: an [`InputSource`], a [`Clock`] and a [`Renderer`].
//! Terminal implementations live in `termtris-input` and `termtris-term`;
//! tests plug in scripted fakes.

pub mod ports;
pub mod runner;

pub use ports::{Clock, InputSource, Renderer, SystemClock};
pub use runner::GameLoop;
