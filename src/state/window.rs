/// Persisted window geometry
///
/// The last window size is stored as JSON in the user's data directory
/// so the app reopens the way it was left:
/// - Linux: ~/.local/share/osuele-sports/window.json
/// - macOS: ~/Library/Application Support/osuele-sports/window.json
/// - Windows: %APPDATA%\osuele-sports\window.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_WIDTH: f32 = 1280.0;
const DEFAULT_HEIGHT: f32 = 860.0;

/// Smaller than this and the header chrome stops fitting.
const MIN_WIDTH: f32 = 640.0;
const MIN_HEIGHT: f32 = 480.0;

#[derive(Debug, Error)]
pub enum WindowStateError {
    #[error("could not determine user data directory")]
    NoDataDir,
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialize window state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Window geometry persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WindowState {
    /// Load the saved geometry, falling back to defaults when there is
    /// no saved state or it cannot be parsed. A corrupt file is not an
    /// error worth surfacing; the user just gets the default size.
    pub fn load() -> Self {
        let Some(path) = state_file_path() else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<WindowState>(&json) {
                Ok(state) => state.clamped(),
                Err(e) => {
                    eprintln!("⚠️  Ignoring corrupt window state {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist the geometry, creating the data directory on first use.
    pub fn save(&self) -> Result<(), WindowStateError> {
        let path = state_file_path().ok_or(WindowStateError::NoDataDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| WindowStateError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.clamped())?;
        std::fs::write(&path, json).map_err(|source| WindowStateError::Write {
            path: path.display().to_string(),
            source,
        })?;

        Ok(())
    }

    pub fn size(&self) -> iced::Size {
        let clamped = self.clamped();
        iced::Size::new(clamped.width, clamped.height)
    }

    /// Keep restored sizes usable even if the saved file was edited.
    fn clamped(&self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

/// Where the state file lives, or None on systems without a data dir.
fn state_file_path() -> Option<PathBuf> {
    let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
    path.push("osuele-sports");
    path.push("window.json");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let state = WindowState {
            width: 1024.0,
            height: 700.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: WindowState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_small_saved_sizes_are_clamped() {
        let state = WindowState {
            width: 80.0,
            height: 60.0,
        };
        let clamped = state.clamped();
        assert_eq!(clamped.width, MIN_WIDTH);
        assert_eq!(clamped.height, MIN_HEIGHT);
    }

    #[test]
    fn test_default_size_is_usable() {
        let state = WindowState::default();
        assert_eq!(state.clamped(), state);
    }
}
