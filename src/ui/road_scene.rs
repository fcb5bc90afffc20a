//! UI rendering for the road crossing game.

use crate::core::event_log::{EventLog, LogKind};
use crate::core::game_state::GameSession;
use crate::road::types::{LaneKind, RuleSet};
use crate::ui::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
    GameResultType,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Body colours indexed by `Vehicle::color_seed`.
const VEHICLE_COLORS: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::LightGreen,
    Color::Yellow,
    Color::Gray,
    Color::Rgb(139, 69, 19),
];

/// What occupies one point of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCell {
    Player,
    Vehicle { color_seed: u8, direction: i32 },
    Lane(LaneKind),
    Empty,
}

/// Classify a point in playfield units. The player draws over vehicles,
/// vehicles over lanes.
pub fn scene_cell(session: &GameSession, x: f64, y: f64) -> SceneCell {
    let contains = |rx: f64, ry: f64, w: f64, h: f64| x >= rx && x < rx + w && y >= ry && y < ry + h;

    let p = &session.player;
    if contains(p.x, p.y, p.width, p.height) {
        return SceneCell::Player;
    }

    for vehicle in &session.vehicles {
        let r = vehicle.rect();
        if contains(r.x, r.y, r.width, r.height) {
            return SceneCell::Vehicle {
                color_seed: vehicle.color_seed,
                direction: vehicle.direction(),
            };
        }
    }

    let grid = session.field.grid;
    session
        .lanes
        .iter()
        .find(|lane| y >= lane.y as f64 && y < lane.y as f64 + grid)
        .map(|lane| SceneCell::Lane(lane.kind))
        .unwrap_or(SceneCell::Empty)
}

/// Render the whole game screen.
pub fn render_road(frame: &mut Frame, area: Rect, session: &GameSession, log: &EventLog) {
    let title = format!(" Crossy Road - {} ", session.rules.name());
    let layout = create_game_layout(frame, area, &title, Color::Green, 26);

    render_play_area(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session, log);

    if session.is_over() {
        render_crash_banner(frame, layout.content, session);
    }
}

/// Render lanes, vehicles and the player scaled to the area.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = session.field.width / width as f64;
    let y_scale = session.field.height / height as f64;
    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let y = (row as f64 + 0.5) * y_scale;
        let spans: Vec<Span> = (0..width)
            .map(|col| {
                let x = (col as f64 + 0.5) * x_scale;
                cell_span(scene_cell(session, x, y), col)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn cell_span(cell: SceneCell, col: usize) -> Span<'static> {
    match cell {
        SceneCell::Player => Span::styled(
            "@",
            Style::default()
                .fg(Color::LightYellow)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        SceneCell::Vehicle {
            color_seed,
            direction,
        } => {
            let color = VEHICLE_COLORS[color_seed as usize % VEHICLE_COLORS.len()];
            let glyph = if direction > 0 { "▶" } else { "◀" };
            Span::styled(glyph, Style::default().fg(color).bg(Color::DarkGray))
        }
        SceneCell::Lane(LaneKind::Road) => {
            // Dashed centre marking
            let glyph = if col % 4 < 2 { "-" } else { " " };
            Span::styled(glyph, Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        }
        SceneCell::Lane(LaneKind::Grass) => {
            Span::styled("\"", Style::default().fg(Color::Green).bg(Color::Rgb(0, 90, 0)))
        }
        SceneCell::Lane(LaneKind::SafeZone) => {
            Span::styled("░", Style::default().fg(Color::LightGreen).bg(Color::Rgb(0, 120, 0)))
        }
        SceneCell::Empty => Span::raw(" "),
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    let status = format!(
        "Score: {}   High Score: {}   Speed: {}",
        session.score, session.high_score, session.tick_rate
    );
    let color = if session.tick_rate >= 90 {
        Color::LightRed
    } else {
        Color::White
    };

    if session.is_over() {
        render_status_bar(
            frame,
            area,
            &status,
            color,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &status,
            color,
            &[("[Arrows/WASD]", "Hop"), ("[Q]", "Quit")],
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, log: &EventLog) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} rules", session.rules.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                session.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{} fps", session.tick_rate),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    if session.rules == RuleSet::Portal {
        lines.push(Line::from(vec![
            Span::styled(" Portals: ", label),
            Span::styled(
                session.portals_reached.to_string(),
                Style::default().fg(Color::Blue),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Log:", label)));
    for entry in log.entries() {
        let color = match entry.kind {
            LogKind::Info => Color::Gray,
            LogKind::Good => Color::Green,
            LogKind::Bad => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.message),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_crash_banner(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (result_type, title) = if session.score > 0 && session.score == session.high_score {
        (GameResultType::NewRecord, "SPLAT! NEW RECORD!")
    } else {
        (GameResultType::Crash, "SPLAT!")
    };
    let message = format!("You crossed {} rows before getting hit.", session.score);
    render_game_over_banner(frame, area, result_type, title, &message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::types::Vehicle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> GameSession {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut session = GameSession::new(RuleSet::Portal, 0, &mut rng);
        session.vehicles.clear();
        session
    }

    #[test]
    fn test_player_cell() {
        let s = session();
        let cell = scene_cell(&s, s.player.x + 1.0, s.player.y + 1.0);
        assert_eq!(cell, SceneCell::Player);
    }

    #[test]
    fn test_lane_cells() {
        let s = session();
        assert_eq!(scene_cell(&s, 5.0, 45.0), SceneCell::Lane(LaneKind::Road));
        assert_eq!(scene_cell(&s, 5.0, 85.0), SceneCell::Lane(LaneKind::Grass));
        assert_eq!(
            scene_cell(&s, 5.0, 700.0),
            SceneCell::Lane(LaneKind::SafeZone)
        );
    }

    #[test]
    fn test_vehicle_cell_over_road() {
        let mut s = session();
        s.vehicles.push(Vehicle {
            x: 100.0,
            y: 40,
            width: 80.0,
            height: 35.0,
            speed: -3.0,
            color_seed: 2,
        });
        assert_eq!(
            scene_cell(&s, 120.0, 50.0),
            SceneCell::Vehicle {
                color_seed: 2,
                direction: -1
            }
        );
    }

    #[test]
    fn test_outside_field_is_empty() {
        let s = session();
        assert_eq!(scene_cell(&s, 5.0, 900.0), SceneCell::Empty);
    }
}
