//! Terminal rendering. Reads the session, never writes back.

pub mod game_common;
pub mod road_scene;

use crate::core::event_log::EventLog;
use crate::core::game_state::GameSession;
use ratatui::Frame;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, session: &GameSession, log: &EventLog) {
    let size = frame.size();
    road_scene::render_road(frame, size, session, log);
}
