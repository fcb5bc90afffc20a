//! JSON persistence for ~/.crossy/ record files.
//!
//! The only record the game keeps is the high score: a single JSON integer
//! per rule set. A bare decimal number is valid JSON, so plain-text records
//! written by hand load too.

use crate::core::constants::DATA_DIR_NAME;
use crate::road::types::RuleSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.crossy/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a record file in ~/.crossy/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as JSON, replacing whatever was there.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Where the high score for one rule set lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreRecord {
    path: Option<PathBuf>,
}

impl HighScoreRecord {
    /// The record under ~/.crossy/. If the home directory is unavailable
    /// the record reads as 0 and writes fail.
    pub fn for_rules(rules: RuleSet) -> Self {
        Self {
            path: save_path(rules.high_score_file()).ok(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored high score. Missing or corrupt records read as 0.
    pub fn load(&self) -> u32 {
        match &self.path {
            Some(path) => load_json_or_default(path),
            None => 0,
        }
    }

    /// Overwrite the stored high score.
    pub fn save(&self, score: u32) -> io::Result<()> {
        let path = self.path.as_deref().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        save_json(path, &score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_record(name: &str) -> HighScoreRecord {
        let path = std::env::temp_dir().join(format!(
            "crossy_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::remove_file(&path).ok();
        HighScoreRecord::at(path)
    }

    fn cleanup(record: &HighScoreRecord) {
        if let Some(path) = record.path() {
            fs::remove_file(path).ok();
        }
    }

    #[test]
    fn test_missing_record_is_zero() {
        let record = temp_record("missing");
        assert_eq!(record.load(), 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let record = temp_record("roundtrip");
        record.save(42).expect("save should succeed");
        assert_eq!(record.load(), 42);
        record.save(43).expect("overwrite should succeed");
        assert_eq!(record.load(), 43);
        cleanup(&record);
    }

    #[test]
    fn test_plain_text_record_loads() {
        let record = temp_record("plain");
        let path = record.path().expect("path").to_path_buf();
        fs::write(&path, "17\n").expect("write");
        assert_eq!(record.load(), 17);
        cleanup(&record);
    }

    #[test]
    fn test_corrupt_record_is_zero() {
        let record = temp_record("corrupt");
        let path = record.path().expect("path").to_path_buf();
        for content in ["", "abc", "-5", "3.5", "{\"score\": 3}"] {
            fs::write(&path, content).expect("write");
            assert_eq!(record.load(), 0, "content {:?}", content);
        }
        cleanup(&record);
    }

    #[test]
    fn test_record_file_names_per_rule_set() {
        let portal = HighScoreRecord::for_rules(RuleSet::Portal);
        let classic = HighScoreRecord::for_rules(RuleSet::Classic);
        if let (Some(a), Some(b)) = (portal.path(), classic.path()) {
            assert!(a.ends_with("highscore.json"));
            assert!(b.ends_with("classic_highscore.json"));
        }
    }
}
