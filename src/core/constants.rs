// Grid and playfield (Portal rules)
pub const GRID_SIZE: f64 = 40.0;
pub const PORTAL_FIELD_WIDTH: f64 = 920.0;
pub const PORTAL_FIELD_HEIGHT: f64 = 800.0;
pub const PORTAL_ROWS_ABOVE_TOP: i32 = 5;
pub const PORTAL_SAFE_ZONE_ROWS: i32 = 3;

// Playfield (Classic rules)
pub const CLASSIC_FIELD_WIDTH: f64 = 400.0;
pub const CLASSIC_FIELD_HEIGHT: f64 = 600.0;
pub const CLASSIC_GOAL_ROWS: i32 = 3;
pub const CLASSIC_ROAD_LANES: i32 = 5;
/// Upward steps only score once the player is above this many rows from the bottom.
pub const CLASSIC_SCORING_ROWS: f64 = 6.0;
pub const CLASSIC_GOAL_BONUS: u32 = 10;

// Tick rate (frames per second)
pub const BASE_TICK_RATE: u32 = 30;
pub const MAX_TICK_RATE: u32 = 120;
pub const TICK_RATE_INCREMENT: u32 = 15;
pub const CLASSIC_TICK_RATE: u32 = 60;

// Player
/// Player hitbox as a fraction of a grid cell (Portal rules).
pub const PORTAL_PLAYER_SCALE: f64 = 0.9;

// Vehicles
pub const VEHICLE_MIN_WIDTH_CELLS: f64 = 2.0;
pub const VEHICLE_MAX_WIDTH_CELLS: f64 = 3.0;
/// Vertical gap between the top of a road lane and the top of a vehicle.
pub const VEHICLE_LANE_INSET: f64 = 2.0;
/// Vehicles are this much shorter than a grid cell.
pub const VEHICLE_HEIGHT_TRIM: f64 = 5.0;
pub const PORTAL_MIN_VEHICLES: usize = 2;
pub const PORTAL_MAX_VEHICLES: usize = 4;
pub const PORTAL_MIN_SPEED: i32 = 2;
pub const PORTAL_MAX_SPEED: i32 = 5;
pub const CLASSIC_SPEEDS: [f64; 4] = [-3.0, -2.0, 2.0, 3.0];
/// Number of distinct body colours the renderer knows about.
pub const VEHICLE_COLOR_COUNT: u8 = 6;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 8;

// Persistence
pub const DATA_DIR_NAME: &str = ".crossy";
pub const PORTAL_HIGH_SCORE_FILE: &str = "highscore.json";
pub const CLASSIC_HIGH_SCORE_FILE: &str = "classic_highscore.json";
