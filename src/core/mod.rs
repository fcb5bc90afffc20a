//! Core game state and per-tick orchestration.

pub mod constants;
pub mod event_log;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use game_state::{GamePhase, GameSession};
pub use tick::{process_tick, restart, TickEvent, TickInput};
