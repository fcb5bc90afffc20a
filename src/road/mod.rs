//! Road crossing simulation: lanes, traffic, player movement and collisions.
//!
//! The player hops across alternating grass and road lanes one grid cell per
//! key press while vehicles stream along each road. Getting hit ends the game.

pub mod collision;
pub mod lanes;
pub mod player;
pub mod traffic;
pub mod types;

pub use types::*;
