//! Bounded log of notable game events, shown in the info panel.

use crate::core::constants::EVENT_LOG_CAPACITY;
use crate::core::tick::TickEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub kind: LogKind,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) {
        if self.entries.len() == EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            message: message.into(),
            kind,
        });
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Map tick events to log entries. Plain steps and per-row points are too
/// frequent to be worth a line.
pub fn apply_tick_events(log: &mut EventLog, events: &[TickEvent]) {
    for event in events {
        match event {
            TickEvent::Moved { .. } | TickEvent::Scored { .. } => {}
            TickEvent::NewHighScore { score } => {
                log.push(format!("New high score: {}", score), LogKind::Good);
            }
            TickEvent::PortalReached { tick_rate } => {
                log.push(
                    format!("Through the portal! Speed {}", tick_rate),
                    LogKind::Info,
                );
            }
            TickEvent::GoalBonus { points } => {
                log.push(format!("Made it across! +{}", points), LogKind::Good);
            }
            TickEvent::Crashed { score } => {
                log.push(format!("Hit by a car at {} points", score), LogKind::Bad);
            }
            TickEvent::Restarted => {
                log.push("New game", LogKind::Info);
            }
        }
    }
}
