//! Lane layout generation.
//!
//! Layouts are a pure function of the rule set: no randomness, so every
//! reset rebuilds exactly the same lanes.

use super::types::{Lane, LaneKind, Playfield, Rect, RuleSet};
use crate::core::constants::{
    CLASSIC_GOAL_ROWS, CLASSIC_ROAD_LANES, PORTAL_ROWS_ABOVE_TOP, PORTAL_SAFE_ZONE_ROWS,
};

/// Row-level description of a layout, in grid rows (row 0 is the top of the
/// visible field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePlan {
    /// First generated row; negative rows sit above the visible field.
    pub first_row: i32,
    /// Rows at the top forced to `SafeZone`.
    pub top_safe_rows: i32,
    /// Rows at the bottom forced to `SafeZone`.
    pub bottom_safe_rows: i32,
    /// Odd rows past this one are grass instead of road.
    pub last_road_row: Option<i32>,
}

impl LanePlan {
    pub fn for_rules(rules: RuleSet) -> Self {
        match rules {
            RuleSet::Portal => Self {
                first_row: -PORTAL_ROWS_ABOVE_TOP,
                top_safe_rows: 0,
                bottom_safe_rows: PORTAL_SAFE_ZONE_ROWS,
                last_road_row: None,
            },
            RuleSet::Classic => Self {
                first_row: 0,
                top_safe_rows: CLASSIC_GOAL_ROWS,
                bottom_safe_rows: 0,
                last_road_row: Some(CLASSIC_GOAL_ROWS + 2 * (CLASSIC_ROAD_LANES - 1)),
            },
        }
    }

    fn kind_for_row(&self, row: i32, total_rows: i32) -> LaneKind {
        if row >= 0 && row < self.top_safe_rows {
            return LaneKind::SafeZone;
        }
        if row >= total_rows - self.bottom_safe_rows {
            return LaneKind::SafeZone;
        }
        let past_roads = self.last_road_row.is_some_and(|last| row > last);
        if row.rem_euclid(2) == 1 && !past_roads {
            LaneKind::Road
        } else {
            LaneKind::Grass
        }
    }
}

/// Build the ordered lane list (top to bottom) for a rule set.
pub fn generate_lanes(rules: RuleSet) -> Vec<Lane> {
    layout_lanes(&rules.playfield(), &LanePlan::for_rules(rules))
}

/// Build lanes for an arbitrary field and plan.
pub fn layout_lanes(field: &Playfield, plan: &LanePlan) -> Vec<Lane> {
    let rows = field.rows();
    let grid = field.grid as i32;
    (plan.first_row..rows)
        .map(|row| Lane {
            kind: plan.kind_for_row(row, rows),
            y: row * grid,
        })
        .collect()
}

/// Top edge of the bottom safe zone, if the rule set has one.
///
/// The player is only vulnerable while strictly above this line.
pub fn safe_zone_top(rules: RuleSet) -> Option<f64> {
    let plan = LanePlan::for_rules(rules);
    if plan.bottom_safe_rows == 0 {
        return None;
    }
    let field = rules.playfield();
    Some((field.rows() - plan.bottom_safe_rows) as f64 * field.grid)
}

/// Goal band at the top of the field, if the rule set has one.
pub fn goal_band(rules: RuleSet) -> Option<Rect> {
    let plan = LanePlan::for_rules(rules);
    if plan.top_safe_rows == 0 {
        return None;
    }
    let field = rules.playfield();
    Some(Rect::new(
        0.0,
        0.0,
        field.width,
        plan.top_safe_rows as f64 * field.grid,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_layout_spans_above_top_to_bottom() {
        let lanes = generate_lanes(RuleSet::Portal);
        assert_eq!(lanes.len(), 25);
        assert_eq!(lanes.first().map(|l| l.y), Some(-200));
        assert_eq!(lanes.last().map(|l| l.y), Some(760));
    }

    #[test]
    fn test_portal_lanes_alternate_by_parity() {
        let lanes = generate_lanes(RuleSet::Portal);
        for lane in lanes.iter().filter(|l| l.y < 680) {
            let row = lane.y / 40;
            let expected = if row.rem_euclid(2) == 1 {
                LaneKind::Road
            } else {
                LaneKind::Grass
            };
            assert_eq!(lane.kind, expected, "row {}", row);
        }
    }

    #[test]
    fn test_portal_bottom_rows_are_safe() {
        let lanes = generate_lanes(RuleSet::Portal);
        let safe: Vec<i32> = lanes
            .iter()
            .filter(|l| l.kind == LaneKind::SafeZone)
            .map(|l| l.y)
            .collect();
        assert_eq!(safe, vec![680, 720, 760]);
        assert_eq!(safe_zone_top(RuleSet::Portal), Some(680.0));
        assert!(goal_band(RuleSet::Portal).is_none());
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate_lanes(RuleSet::Portal), generate_lanes(RuleSet::Portal));
        assert_eq!(
            generate_lanes(RuleSet::Classic),
            generate_lanes(RuleSet::Classic)
        );
    }

    #[test]
    fn test_classic_layout() {
        let lanes = generate_lanes(RuleSet::Classic);
        assert_eq!(lanes.len(), 15);
        let roads: Vec<i32> = lanes
            .iter()
            .filter(|l| l.kind == LaneKind::Road)
            .map(|l| l.y)
            .collect();
        assert_eq!(roads, vec![120, 200, 280, 360, 440]);
        assert!(lanes[..3].iter().all(|l| l.kind == LaneKind::SafeZone));
        assert!(safe_zone_top(RuleSet::Classic).is_none());
        let band = goal_band(RuleSet::Classic).expect("classic has a goal band");
        assert!((band.height - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_plan_four_safe_rows() {
        let field = Playfield::new(400.0, 400.0, 40.0);
        let plan = LanePlan {
            first_row: -2,
            top_safe_rows: 0,
            bottom_safe_rows: 4,
            last_road_row: None,
        };
        let lanes = layout_lanes(&field, &plan);
        assert_eq!(lanes.len(), 12);
        assert_eq!(lanes[0].kind, LaneKind::Grass);
        assert_eq!(lanes[1].kind, LaneKind::Road);
        assert_eq!(
            lanes
                .iter()
                .filter(|l| l.kind == LaneKind::SafeZone)
                .count(),
            4
        );
    }
}
