//! Keyboard handling: key mapping and edge detection.
//!
//! Movement fires once per key press. The edge detector compares the keys
//! held this frame against the previous frame, so holding a key never
//! produces a second step.

use crate::core::tick::TickInput;
use crate::road::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashSet;

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Map a terminal key to a command. Arrows and WASD both move.
pub fn map_key(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Held-key tracker for movement keys.
#[derive(Debug, Clone)]
pub struct InputEdges {
    current: HashSet<Direction>,
    previous: HashSet<Direction>,
    /// Whether the terminal reports key releases. Without them every key is
    /// treated as released at the end of the frame it was pressed in.
    reports_release: bool,
}

impl InputEdges {
    pub fn new(reports_release: bool) -> Self {
        Self {
            current: HashSet::new(),
            previous: HashSet::new(),
            reports_release,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        self.current.insert(direction);
    }

    pub fn release(&mut self, direction: Direction) {
        self.current.remove(&direction);
    }

    /// Feed a raw terminal event. Returns the non-movement command, if any.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        let command = map_key(key)?;
        match (command, key.kind) {
            (Command::Move(direction), KeyEventKind::Press) => {
                self.press(direction);
                None
            }
            (Command::Move(direction), KeyEventKind::Release) => {
                self.release(direction);
                None
            }
            (Command::Move(_), KeyEventKind::Repeat) => None,
            (_, KeyEventKind::Press) => Some(command),
            _ => None,
        }
    }

    /// Directions held now that were not held last frame, in priority
    /// order (up, down, left, right).
    pub fn rising_edges(&self) -> Vec<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|d| self.current.contains(d) && !self.previous.contains(d))
            .collect()
    }

    /// Input for this frame's tick.
    pub fn frame_input(&self) -> TickInput {
        TickInput {
            step: self.rising_edges().first().copied(),
            movement_released: self.previous.is_empty(),
        }
    }

    /// Close the frame: what is held now becomes last frame's state.
    pub fn end_frame(&mut self) {
        if self.reports_release {
            self.previous = self.current.clone();
        } else {
            self.previous.clear();
            self.current.clear();
        }
    }

    pub fn all_released(&self) -> bool {
        self.current.is_empty()
    }
}
