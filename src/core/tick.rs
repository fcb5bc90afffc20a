//! Per-tick orchestration: the game state controller.
//!
//! `process_tick` runs one frame of simulation in a fixed order: input,
//! vehicle motion, goal check, collision. It returns the [`TickEvent`]s that
//! happened so the front end can log them and persist new records without
//! the game logic touching I/O.

use crate::core::constants::CLASSIC_GOAL_BONUS;
use crate::core::game_state::{GamePhase, GameSession};
use crate::road::collision::{check_collision, rects_overlap};
use crate::road::lanes::goal_band;
use crate::road::player::move_player;
use crate::road::traffic::advance_vehicles;
use crate::road::types::{Direction, RuleSet};
use rand::Rng;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// The player stepped to a new cell.
    Moved { x: f64, y: f64 },
    /// Points were awarded.
    Scored { points: u32, score: u32 },
    /// The high score was beaten; the record should be written now.
    NewHighScore { score: u32 },
    /// The player passed the top edge and the game sped up.
    PortalReached { tick_rate: u32 },
    /// The player reached the goal band (Classic rules).
    GoalBonus { points: u32 },
    /// A vehicle hit the player.
    Crashed { score: u32 },
    /// A new game started after a crash.
    Restarted,
}

/// Input consumed by one tick, produced by the edge detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// At most one discrete step per tick.
    pub step: Option<Direction>,
    /// No movement key was held at the end of the previous frame.
    pub movement_released: bool,
}

/// Run one tick. Does nothing once the game is over.
pub fn process_tick(session: &mut GameSession, input: TickInput) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if session.is_over() {
        return events;
    }

    // 1. Input
    if input.movement_released {
        session.player.can_move = true;
    }
    if let Some(direction) = input.step {
        events.extend(move_player(session, direction));
    }

    // 2. Vehicles
    advance_vehicles(&mut session.vehicles, session.field.width);

    // Goal band bonus happens before collision so the player is already
    // back at the start row when vehicles are checked.
    if session.rules == RuleSet::Classic {
        events.extend(check_goal(session));
    }

    session.tick_count += 1;

    // 3. Collision
    if check_collision(&session.player, &session.vehicles, session.rules) {
        session.phase = GamePhase::GameOver;
        events.push(TickEvent::Crashed {
            score: session.score,
        });
    }

    events
}

fn check_goal(session: &mut GameSession) -> Vec<TickEvent> {
    let Some(band) = goal_band(session.rules) else {
        return Vec::new();
    };
    if !rects_overlap(&session.player.rect(), &band) {
        return Vec::new();
    }

    let mut events = vec![TickEvent::GoalBonus {
        points: CLASSIC_GOAL_BONUS,
    }];
    events.extend(session.add_score(CLASSIC_GOAL_BONUS));
    // Only the row resets; the player keeps its column.
    session.player.y = session.rules.player_start().1;
    events
}

/// Leave the game-over state and start a fresh game. Ignored while playing.
pub fn restart<R: Rng>(session: &mut GameSession, rng: &mut R) -> Option<TickEvent> {
    if !session.is_over() {
        return None;
    }
    session.reset(rng);
    Some(TickEvent::Restarted)
}
