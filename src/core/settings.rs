//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file so display preferences
//! survive between runs.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory, e.g.
//! `~/.config/chesslogic/settings.json` on Linux. Falls back to the working
//! directory when no configuration directory can be resolved. The `--config`
//! flag overrides both.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unreadable file yields the
//! defaults with a warning. [`save_settings`] reports errors to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::CoreResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// How `replay` prints its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw pieces with chess glyphs instead of letters
    pub unicode_pieces: bool,
    /// Mark legal destinations of the selected piece on the board
    pub show_legal_moves: bool,
    /// `tracing` filter directive used when neither `--log` nor `RUST_LOG` is set
    pub log_filter: String,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            unicode_pieces: false,
            show_legal_moves: true,
            log_filter: "warn".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

/// Resolve the default settings file path
///
/// Returns `settings.json` inside the user's configuration directory, or a
/// bare `settings.json` (relative to the working directory) if the platform
/// has none.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "chesslogic", "chesslogic") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse the settings file
pub fn try_load_settings(path: &Path) -> CoreResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings, falling back to defaults on any failure
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match try_load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write `settings` as pretty JSON, creating the parent directory if needed
pub fn save_settings(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
