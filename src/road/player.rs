//! Player movement: one grid cell per accepted input edge.

use super::types::{Direction, Player, RuleSet};
use crate::core::constants::{CLASSIC_SCORING_ROWS, MAX_TICK_RATE, TICK_RATE_INCREMENT};
use crate::core::game_state::GameSession;
use crate::core::tick::TickEvent;

/// Geometric result of a single step attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// `can_move` was false; nothing changed.
    Ignored,
    /// The step would leave the field and the rule set clamps instead of wrapping.
    Blocked,
    /// The player now stands at `(x, y)`.
    Stepped { x: f64, y: f64, upward: bool },
    /// The player went past the top edge and was sent back to the start.
    Portal,
}

/// Compute and apply a step for the player alone.
///
/// Scoring and tick-rate effects are applied by [`move_player`].
pub fn step_player(player: &mut Player, rules: RuleSet, direction: Direction) -> StepOutcome {
    if !player.can_move {
        return StepOutcome::Ignored;
    }

    let field = rules.playfield();
    let (dx, dy) = direction.delta();
    let new_x = player.x + dx as f64 * field.grid;
    let new_y = player.y + dy as f64 * field.grid;
    let max_x = field.width - player.width;

    let outcome = match rules {
        RuleSet::Portal => {
            if new_y < 0.0 {
                player.reset_position(rules);
                StepOutcome::Portal
            } else {
                let x = if new_x < 0.0 {
                    max_x
                } else if new_x > max_x {
                    0.0
                } else {
                    new_x
                };
                let y = new_y.min(field.height - field.grid * 2.0);
                player.x = x;
                player.y = y;
                StepOutcome::Stepped {
                    x,
                    y,
                    upward: dy < 0,
                }
            }
        }
        RuleSet::Classic => {
            let x_ok = (0.0..=max_x).contains(&new_x);
            let y_ok = (0.0..=field.height - player.height).contains(&new_y);
            let accepted = if dx != 0 { x_ok } else { y_ok };
            if !accepted {
                return StepOutcome::Blocked;
            }
            player.x = new_x;
            player.y = new_y;
            StepOutcome::Stepped {
                x: new_x,
                y: new_y,
                upward: dy < 0,
            }
        }
    };

    player.can_move = false;
    outcome
}

/// Move the session's player one cell and apply the rule set's effects.
pub fn move_player(session: &mut GameSession, direction: Direction) -> Vec<TickEvent> {
    let rules = session.rules;
    let mut events = Vec::new();

    match step_player(&mut session.player, rules, direction) {
        StepOutcome::Ignored | StepOutcome::Blocked => {}
        StepOutcome::Portal => {
            session.tick_rate = (session.tick_rate + TICK_RATE_INCREMENT).min(MAX_TICK_RATE);
            session.portals_reached += 1;
            events.push(TickEvent::PortalReached {
                tick_rate: session.tick_rate,
            });
        }
        StepOutcome::Stepped { x, y, upward } => {
            events.push(TickEvent::Moved { x, y });
            if upward && scores_upward_step(session, y) {
                events.extend(session.add_score(1));
            }
        }
    }

    events
}

fn scores_upward_step(session: &GameSession, new_y: f64) -> bool {
    match session.rules {
        RuleSet::Portal => true,
        RuleSet::Classic => new_y < session.field.height - session.field.grid * CLASSIC_SCORING_ROWS,
    }
}
