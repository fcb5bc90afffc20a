//! Vehicle spawning and motion.

use super::types::{Lane, LaneKind, Playfield, RuleSet, Vehicle};
use crate::core::constants::*;
use rand::Rng;

/// Spawn a fresh batch of vehicles for every road lane.
///
/// Called on game start and on every restart; the previous batch is
/// discarded by the caller.
pub fn spawn_vehicles<R: Rng>(rules: RuleSet, lanes: &[Lane], rng: &mut R) -> Vec<Vehicle> {
    let field = rules.playfield();
    let mut vehicles = Vec::new();
    for lane in lanes.iter().filter(|l| l.kind == LaneKind::Road) {
        match rules {
            RuleSet::Portal => spawn_portal_lane(&field, lane.y, rng, &mut vehicles),
            RuleSet::Classic => spawn_classic_lane(&field, lane.y, rng, &mut vehicles),
        }
    }
    vehicles
}

/// 2-4 vehicles sharing one speed, spread across the lane with a little jitter.
fn spawn_portal_lane<R: Rng>(field: &Playfield, lane_y: i32, rng: &mut R, out: &mut Vec<Vehicle>) {
    let count = rng.gen_range(PORTAL_MIN_VEHICLES..=PORTAL_MAX_VEHICLES);
    let direction = if rng.gen_bool(0.5) { 1 } else { -1 };
    let speed = (rng.gen_range(PORTAL_MIN_SPEED..=PORTAL_MAX_SPEED) * direction) as f64;
    let spacing = (field.width / count as f64).floor();
    let max_jitter = (spacing / 2.0).floor() as i64;

    for slot in 0..count {
        let width = random_width(field, rng);
        let jitter = rng.gen_range(0..=max_jitter) as f64;
        out.push(Vehicle {
            x: slot as f64 * spacing + jitter,
            y: lane_y,
            width,
            height: field.grid - VEHICLE_HEIGHT_TRIM,
            speed,
            color_seed: rng.gen_range(0..VEHICLE_COLOR_COUNT),
        });
    }
}

/// One vehicle, sometimes two, starting just off the edge behind them.
fn spawn_classic_lane<R: Rng>(
    field: &Playfield,
    lane_y: i32,
    rng: &mut R,
    out: &mut Vec<Vehicle>,
) {
    let speed = CLASSIC_SPEEDS[rng.gen_range(0..CLASSIC_SPEEDS.len())];
    let count = if rng.gen_bool(0.5) { 2 } else { 1 };
    let spacing = (field.width / count as f64).floor();

    for slot in 0..count {
        let width = random_width(field, rng);
        let (entry, step) = if speed > 0.0 {
            (-width, spacing)
        } else {
            (field.width, -spacing)
        };
        out.push(Vehicle {
            x: entry + slot as f64 * step,
            y: lane_y,
            width,
            height: field.grid - VEHICLE_HEIGHT_TRIM,
            speed,
            color_seed: rng.gen_range(0..VEHICLE_COLOR_COUNT),
        });
    }
}

fn random_width<R: Rng>(field: &Playfield, rng: &mut R) -> f64 {
    let min = (field.grid * VEHICLE_MIN_WIDTH_CELLS) as i64;
    let max = (field.grid * VEHICLE_MAX_WIDTH_CELLS) as i64;
    rng.gen_range(min..=max) as f64
}

/// Move one vehicle by its speed, wrapping to the far side once it has
/// fully left the field.
pub fn advance_vehicle(vehicle: &mut Vehicle, field_width: f64) {
    vehicle.x += vehicle.speed;
    if vehicle.speed > 0.0 && vehicle.x > field_width {
        vehicle.x = -vehicle.width;
    } else if vehicle.speed < 0.0 && vehicle.x < -vehicle.width {
        vehicle.x = field_width;
    }
}

pub fn advance_vehicles(vehicles: &mut [Vehicle], field_width: f64) {
    for vehicle in vehicles {
        advance_vehicle(vehicle, field_width);
    }
}

/// Whether the vehicle's lane overlaps the visible field.
pub fn is_visible(vehicle: &Vehicle, field: &Playfield) -> bool {
    let y = vehicle.y as f64;
    y >= -vehicle.height && y <= field.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::lanes::generate_lanes;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn portal_batch(seed: u64) -> Vec<Vehicle> {
        let lanes = generate_lanes(RuleSet::Portal);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        spawn_vehicles(RuleSet::Portal, &lanes, &mut rng)
    }

    #[test]
    fn test_vehicles_only_on_road_lanes() {
        let lanes = generate_lanes(RuleSet::Portal);
        let vehicles = portal_batch(7);
        assert!(!vehicles.is_empty());
        for vehicle in &vehicles {
            assert!(lanes
                .iter()
                .any(|l| l.y == vehicle.y && l.kind == LaneKind::Road));
        }
    }

    #[test]
    fn test_portal_batch_shape_per_lane() {
        let lanes = generate_lanes(RuleSet::Portal);
        let vehicles = portal_batch(42);
        for lane in lanes.iter().filter(|l| l.kind == LaneKind::Road) {
            let in_lane: Vec<&Vehicle> = vehicles.iter().filter(|v| v.y == lane.y).collect();
            assert!((2..=4).contains(&in_lane.len()));
            let speed = in_lane[0].speed;
            assert!((2.0..=5.0).contains(&speed.abs()));
            for v in &in_lane {
                assert!((v.speed - speed).abs() < f64::EPSILON);
                assert!((80.0..=120.0).contains(&v.width));
                assert!(v.x >= 0.0 && v.x < 920.0);
            }
        }
    }

    #[test]
    fn test_portal_batch_never_fully_overlaps() {
        for seed in 0..20 {
            let vehicles = portal_batch(seed);
            for (i, a) in vehicles.iter().enumerate() {
                for b in vehicles.iter().skip(i + 1).filter(|b| b.y == a.y) {
                    let contained = (a.x >= b.x && a.x + a.width <= b.x + b.width)
                        || (b.x >= a.x && b.x + b.width <= a.x + a.width);
                    assert!(!contained, "seed {} produced stacked vehicles", seed);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        assert_eq!(portal_batch(99), portal_batch(99));
    }

    #[test]
    fn test_classic_batch_enters_from_edges() {
        let lanes = generate_lanes(RuleSet::Classic);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let vehicles = spawn_vehicles(RuleSet::Classic, &lanes, &mut rng);
        assert!(vehicles.len() >= 5 && vehicles.len() <= 10);
        for v in &vehicles {
            assert!(CLASSIC_SPEEDS.contains(&v.speed));
            assert!(v.x >= -v.width && v.x <= 400.0);
        }
    }

    #[test]
    fn test_wrap_right_moving() {
        let mut v = Vehicle {
            x: 919.0,
            y: 40,
            width: 100.0,
            height: 35.0,
            speed: 3.0,
            color_seed: 0,
        };
        advance_vehicle(&mut v, 920.0);
        assert!((v.x - -100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wrap_left_moving() {
        let mut v = Vehicle {
            x: -99.0,
            y: 40,
            width: 100.0,
            height: 35.0,
            speed: -2.0,
            color_seed: 0,
        };
        advance_vehicle(&mut v, 920.0);
        assert!((v.x - 920.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positions_stay_in_bounds_for_many_ticks() {
        let mut vehicles = portal_batch(11);
        for _ in 0..5_000 {
            advance_vehicles(&mut vehicles, 920.0);
            for v in &vehicles {
                assert!(v.x >= -v.width && v.x <= 920.0, "x = {}", v.x);
            }
        }
    }

    #[test]
    fn test_visibility() {
        let field = RuleSet::Portal.playfield();
        let mut v = Vehicle {
            x: 0.0,
            y: -200,
            width: 100.0,
            height: 35.0,
            speed: 2.0,
            color_seed: 0,
        };
        assert!(!is_visible(&v, &field));
        v.y = 40;
        assert!(is_visible(&v, &field));
    }
}
