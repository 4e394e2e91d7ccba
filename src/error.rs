//! Error type shared by the scanning, writing and prompting stages

use std::path::Path;

/// Custom error type for a gamedesk run
#[derive(Debug)]
pub enum GamedeskError {
    /// The library configuration file is missing or unreadable
    LibraryConfig { path: String, reason: String },
    /// Writing the desktop entry or updating its permissions failed
    ShortcutWrite { path: String, reason: String },
    /// The console reached end of input while a prompt was waiting
    InputClosed,
    /// Generic I/O error with context
    Io { context: String, reason: String },
}

impl GamedeskError {
    pub fn library_config(path: &Path, err: impl std::fmt::Display) -> Self {
        GamedeskError::LibraryConfig {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn shortcut_write(path: &Path, err: impl std::fmt::Display) -> Self {
        GamedeskError::ShortcutWrite {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn io(context: &str, err: impl std::fmt::Display) -> Self {
        GamedeskError::Io {
            context: context.to_string(),
            reason: err.to_string(),
        }
    }
}

impl std::fmt::Display for GamedeskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamedeskError::LibraryConfig { path, reason } => {
                write!(f, "Failed to read library configuration '{}': {}", path, reason)
            }
            GamedeskError::ShortcutWrite { path, reason } => {
                write!(f, "Failed to write desktop entry '{}': {}", path, reason)
            }
            GamedeskError::InputClosed => write!(f, "Input closed before a choice was made"),
            GamedeskError::Io { context, reason } => write!(f, "{}: {}", context, reason),
        }
    }
}

impl std::error::Error for GamedeskError {}
