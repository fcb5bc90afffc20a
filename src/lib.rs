//! Crossy - terminal road crossing game library
//!
//! This module exposes the game logic for testing and for the binary.

pub mod core;
pub mod input;
pub mod road;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::game_state::{GamePhase, GameSession};
pub use crate::core::tick::{process_tick, restart, TickEvent, TickInput};
pub use crate::road::types::{Direction, Lane, LaneKind, Player, Playfield, RuleSet, Vehicle};
