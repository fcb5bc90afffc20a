//! Road crossing data structures.
//!
//! Lanes, vehicles and the player live in playfield units (the grid is
//! `GRID_SIZE` units per cell). The terminal scene scales them to whatever
//! area it is given.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// The two rule sets the game can be played under.
///
/// They disagree on scoring, movement limits and where the player is safe,
/// so each keeps its own tuning instead of sharing a compromise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleSet {
    /// Horizontal wrap, a portal at the top that speeds the game up, and a
    /// safe zone at the bottom.
    #[default]
    Portal,
    /// Clamped movement, a goal band at the top worth a flat bonus, and no
    /// invulnerability anywhere.
    Classic,
}

impl RuleSet {
    pub const ALL: [RuleSet; 2] = [RuleSet::Portal, RuleSet::Classic];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Portal => "Portal",
            Self::Classic => "Classic",
        }
    }

    pub fn playfield(&self) -> Playfield {
        match self {
            Self::Portal => Playfield::new(PORTAL_FIELD_WIDTH, PORTAL_FIELD_HEIGHT, GRID_SIZE),
            Self::Classic => Playfield::new(CLASSIC_FIELD_WIDTH, CLASSIC_FIELD_HEIGHT, GRID_SIZE),
        }
    }

    /// Tick rate at the start of every game.
    pub fn base_tick_rate(&self) -> u32 {
        match self {
            Self::Portal => BASE_TICK_RATE,
            Self::Classic => CLASSIC_TICK_RATE,
        }
    }

    /// File name of the persisted high-score record for this rule set.
    pub fn high_score_file(&self) -> &'static str {
        match self {
            Self::Portal => PORTAL_HIGH_SCORE_FILE,
            Self::Classic => CLASSIC_HIGH_SCORE_FILE,
        }
    }

    /// Side length of the (square) player hitbox.
    pub fn player_size(&self) -> f64 {
        match self {
            Self::Portal => GRID_SIZE * PORTAL_PLAYER_SCALE,
            Self::Classic => GRID_SIZE,
        }
    }

    /// Where the player starts and respawns.
    pub fn player_start(&self) -> (f64, f64) {
        let field = self.playfield();
        let y = field.height - field.grid * 2.0;
        let x = match self {
            // Centre column, snapped to the grid.
            Self::Portal => (field.columns() / 2) as f64 * field.grid,
            Self::Classic => (field.width / 2.0).floor(),
        };
        (x, y)
    }
}

/// Dimensions of the simulated playfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
    pub grid: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64, grid: f64) -> Self {
        Self {
            width,
            height,
            grid,
        }
    }

    /// Number of whole grid rows inside the visible field.
    pub fn rows(&self) -> i32 {
        (self.height / self.grid) as i32
    }

    /// Number of whole grid columns inside the visible field.
    pub fn columns(&self) -> i32 {
        (self.width / self.grid) as i32
    }
}

/// Axis-aligned rectangle in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Classification of a single horizontal strip of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneKind {
    Grass,
    Road,
    SafeZone,
}

/// One lane. Never mutated after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub kind: LaneKind,
    /// Top edge of the lane; negative for lanes above the visible field.
    pub y: i32,
}

/// A vehicle travelling along a road lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub x: f64,
    /// Top edge of the road lane the vehicle belongs to.
    pub y: i32,
    pub width: f64,
    pub height: f64,
    /// Units per tick; the sign is the travel direction.
    pub speed: f64,
    /// Index into the renderer's body palette.
    pub color_seed: u8,
}

impl Vehicle {
    /// +1 when travelling right, -1 when travelling left.
    pub fn direction(&self) -> i32 {
        if self.speed > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Hitbox, inset slightly from the top of the lane.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.y as f64 + VEHICLE_LANE_INSET,
            self.width,
            self.height,
        )
    }
}

/// Discrete movement directions, one grid cell per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid step as `(dx, dy)`; y grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// The player-controlled character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// False from an accepted move until every movement key is released.
    pub can_move: bool,
}

impl Player {
    /// A player standing at the rule set's start position.
    pub fn new(rules: RuleSet) -> Self {
        let (x, y) = rules.player_start();
        let size = rules.player_size();
        Self {
            x,
            y,
            width: size,
            height: size,
            can_move: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Put the player back at the start position without touching `can_move`.
    pub fn reset_position(&mut self, rules: RuleSet) {
        let (x, y) = rules.player_start();
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_playfield() {
        let field = RuleSet::Portal.playfield();
        assert_eq!(field.rows(), 20);
        assert_eq!(field.columns(), 23);
    }

    #[test]
    fn test_player_starts_grid_aligned_under_portal_rules() {
        let player = Player::new(RuleSet::Portal);
        assert!((player.x % GRID_SIZE).abs() < f64::EPSILON);
        assert!((player.y % GRID_SIZE).abs() < f64::EPSILON);
        assert!((player.y - 720.0).abs() < f64::EPSILON);
        assert!(player.can_move);
    }

    #[test]
    fn test_classic_player_start() {
        let player = Player::new(RuleSet::Classic);
        assert!((player.x - 200.0).abs() < f64::EPSILON);
        assert!((player.y - 520.0).abs() < f64::EPSILON);
        assert!((player.width - GRID_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vehicle_direction_follows_speed_sign() {
        let mut vehicle = Vehicle {
            x: 0.0,
            y: 40,
            width: 80.0,
            height: 35.0,
            speed: 3.0,
            color_seed: 0,
        };
        assert_eq!(vehicle.direction(), 1);
        vehicle.speed = -2.0;
        assert_eq!(vehicle.direction(), -1);
    }

    #[test]
    fn test_vehicle_rect_is_inset_from_lane() {
        let vehicle = Vehicle {
            x: 10.0,
            y: 40,
            width: 80.0,
            height: 35.0,
            speed: 3.0,
            color_seed: 0,
        };
        let rect = vehicle.rect();
        assert!((rect.y - 42.0).abs() < f64::EPSILON);
        assert!((rect.bottom() - 77.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule_set_names_and_records_differ() {
        assert_ne!(RuleSet::Portal.name(), RuleSet::Classic.name());
        assert_ne!(
            RuleSet::Portal.high_score_file(),
            RuleSet::Classic.high_score_file()
        );
        assert_eq!(RuleSet::default(), RuleSet::Portal);
    }
}
