//! Player/vehicle collision detection.

use super::lanes::safe_zone_top;
use super::traffic::is_visible;
use super::types::{Player, Rect, RuleSet, Vehicle};

/// Strictly positive overlap on both axes. Rectangles that only share an
/// edge do not intersect.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Whether the player can be hit at its current position.
pub fn is_vulnerable(player: &Player, rules: RuleSet) -> bool {
    match safe_zone_top(rules) {
        Some(top) => player.y < top,
        None => true,
    }
}

/// Check the player against every visible vehicle.
pub fn check_collision(player: &Player, vehicles: &[Vehicle], rules: RuleSet) -> bool {
    if !is_vulnerable(player, rules) {
        return false;
    }
    let field = rules.playfield();
    let player_rect = player.rect();
    vehicles
        .iter()
        .filter(|v| is_visible(v, &field))
        .any(|v| rects_overlap(&player_rect, &v.rect()))
}
