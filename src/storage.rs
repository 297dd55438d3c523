//! High-score persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

// Persistent storage
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct SaveData {
    #[serde(rename = "highScore", default)]
    pub high_score: u32,
}

/// Where the high score lives between sessions.
pub trait ScoreStore {
    /// Reads the stored high score; nothing stored yet reads as zero.
    fn load(&self) -> Result<u32>;
    fn save(&mut self, high_score: u32) -> Result<()>;
}

/// JSON document on disk, `{"highScore": n}`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_PATH: &'static str = "snake_save.json";

    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let data: SaveData = serde_json::from_str(&text)?;
        Ok(data.high_score)
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        let text = serde_json::to_string_pretty(&SaveData { high_score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Keeps the score in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    high_score: Option<u32>,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save(&mut self, high_score: u32) -> Result<()> {
        self.high_score = Some(high_score);
        Ok(())
    }
}
