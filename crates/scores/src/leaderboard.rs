//! JSON-file leaderboard keyed by player name.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Overrides the data directory entirely when set.
pub const DATA_DIR_ENV: &str = "TUI_2048_DATA_DIR";

/// Directory created under the XDG data home.
pub const GAME_DIRECTORY_NAME: &str = "2048";

pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("leaderboard I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("leaderboard file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data directory: set TUI_2048_DATA_DIR, XDG_DATA_HOME or HOME")]
    NoDataDir,
    #[error("player name must not be empty")]
    EmptyName,
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("player name already taken: {0}")]
    NameTaken(String),
}

pub type Result<T> = std::result::Result<T, ScoreStoreError>;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

/// Pick the data directory from (in order) an explicit override, the XDG
/// data home, or `$HOME/.local/share`.
///
/// Empty values are treated as unset.
pub fn resolve_data_dir(
    override_dir: Option<&str>,
    xdg_data_home: Option<&str>,
    home: Option<&str>,
) -> Option<PathBuf> {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|s| !s.is_empty())
    }

    if let Some(dir) = non_empty(override_dir) {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = non_empty(xdg_data_home) {
        return Some(Path::new(xdg).join(GAME_DIRECTORY_NAME));
    }
    non_empty(home).map(|h| {
        Path::new(h)
            .join(".local")
            .join("share")
            .join(GAME_DIRECTORY_NAME)
    })
}

/// Handle to the leaderboard file. Every operation re-reads the file, so
/// concurrent sessions see each other's results.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    /// Open (creating if needed) the leaderboard inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ScoreStoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let board = Self {
            path: dir.join(LEADERBOARD_FILE_NAME),
        };
        if !board.path.exists() {
            info!(path = %board.path.display(), "creating leaderboard");
            board.write(&BTreeMap::new())?;
        }
        Ok(board)
    }

    /// Open the leaderboard in the directory chosen by the environment.
    pub fn open_default() -> Result<Self> {
        let dir = resolve_data_dir(
            env::var(DATA_DIR_ENV).ok().as_deref(),
            env::var("XDG_DATA_HOME").ok().as_deref(),
            env::var("HOME").ok().as_deref(),
        )
        .ok_or(ScoreStoreError::NoDataDir)?;
        Self::open(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All scores by player name.
    pub fn read(&self) -> Result<BTreeMap<String, u64>> {
        let text = fs::read_to_string(&self.path).map_err(|source| self.io_err(source))?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|source| ScoreStoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the whole leaderboard.
    ///
    /// Writes to a sibling temp file and renames it over the original so a
    /// crash never leaves a half-written file.
    pub fn write(&self, scores: &BTreeMap<String, u64>) -> Result<()> {
        let json = serde_json::to_string_pretty(scores).map_err(|source| ScoreStoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| ScoreStoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_err(source))
    }

    /// Record a finished game. Keeps the better of the stored and new score.
    ///
    /// Returns true if `score` became the player's best.
    pub fn record(&self, name: &str, score: u64) -> Result<bool> {
        let name = validate_name(name)?;
        let mut scores = self.read()?;
        let best = scores.get(name).map_or(true, |&old| score > old);
        if best {
            scores.insert(name.to_string(), score);
            self.write(&scores)?;
        }
        debug!(name, score, best, "score recorded");
        Ok(best)
    }

    /// Move a player's score to a new name. Both names are trimmed.
    pub fn rename(&self, old: &str, new: &str) -> Result<()> {
        let old = validate_name(old)?;
        let new = validate_name(new)?;
        let mut scores = self.read()?;
        if scores.contains_key(new) {
            return Err(ScoreStoreError::NameTaken(new.to_string()));
        }
        let score = scores
            .remove(old)
            .ok_or_else(|| ScoreStoreError::UnknownPlayer(old.to_string()))?;
        scores.insert(new.to_string(), score);
        self.write(&scores)
    }

    /// Delete a player's entry, returning their score.
    pub fn remove(&self, name: &str) -> Result<u64> {
        let name = validate_name(name)?;
        let mut scores = self.read()?;
        let score = scores
            .remove(name)
            .ok_or_else(|| ScoreStoreError::UnknownPlayer(name.to_string()))?;
        self.write(&scores)?;
        Ok(score)
    }

    /// Entries by score (highest first), ties broken by name.
    pub fn ranked(&self) -> Result<Vec<ScoreEntry>> {
        let mut entries: Vec<ScoreEntry> = self
            .read()?
            .into_iter()
            .map(|(name, score)| ScoreEntry { name, score })
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    /// Highest score on the board, if any.
    pub fn best(&self) -> Result<Option<u64>> {
        Ok(self.read()?.values().copied().max())
    }

    fn io_err(&self, source: io::Error) -> ScoreStoreError {
        ScoreStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(ScoreStoreError::EmptyName)
    } else {
        Ok(name)
    }
}
