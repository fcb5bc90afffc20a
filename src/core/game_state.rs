//! The game session: everything one run of the game owns.

use crate::core::tick::TickEvent;
use crate::road::lanes::generate_lanes;
use crate::road::traffic::spawn_vehicles;
use crate::road::types::{Lane, Player, Playfield, RuleSet, Vehicle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Complete simulation state, passed by reference into every component.
///
/// The renderer reads it and never writes back.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub rules: RuleSet,
    pub field: Playfield,
    pub lanes: Vec<Lane>,
    pub vehicles: Vec<Vehicle>,
    pub player: Player,
    pub score: u32,
    /// Best score seen by this process, seeded from the persisted record.
    pub high_score: u32,
    pub phase: GamePhase,
    /// Frames per second; only changes how long a frame lasts.
    pub tick_rate: u32,
    /// Ticks simulated since the last (re)start.
    pub tick_count: u64,
    /// Portal trips since the last (re)start.
    pub portals_reached: u32,
}

impl GameSession {
    pub fn new<R: Rng>(rules: RuleSet, high_score: u32, rng: &mut R) -> Self {
        let lanes = generate_lanes(rules);
        let vehicles = spawn_vehicles(rules, &lanes, rng);
        Self {
            rules,
            field: rules.playfield(),
            lanes,
            vehicles,
            player: Player::new(rules),
            score: 0,
            high_score,
            phase: GamePhase::Playing,
            tick_rate: rules.base_tick_rate(),
            tick_count: 0,
            portals_reached: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Wall-clock length of one frame at the current tick rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_rate.max(1) as u64)
    }

    /// Add points, raising the high score when it is beaten.
    pub fn add_score(&mut self, points: u32) -> Vec<TickEvent> {
        self.score += points;
        let mut events = vec![TickEvent::Scored {
            points,
            score: self.score,
        }];
        if self.score > self.high_score {
            self.high_score = self.score;
            events.push(TickEvent::NewHighScore { score: self.score });
        }
        events
    }

    /// Start over: fresh player, score and tick rate, regenerated lanes and
    /// vehicles. The high score survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let high_score = self.high_score;
        *self = Self::new(self.rules, high_score, rng);
    }
}
