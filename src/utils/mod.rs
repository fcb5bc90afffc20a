//! Utility modules: build info, record persistence.

pub mod build_info;
pub mod persistence;

pub use persistence::HighScoreRecord;
