//! Game detection module
//!
//! Finds the libraries of a Steam installation and the games installed in
//! them.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamedesk::game_finder::{locate_libraries, scan_entries};
//!
//! let libraries = locate_libraries(&steamapps)?;
//! for entry in scan_entries(&libraries) {
//!     println!("Found: {} ({})", entry.name, entry.app_id);
//! }
//! ```

mod library;
mod steam;
pub mod vdf;

use std::fmt;

pub use library::{locate_libraries, parse_library_folders, LIBRARY_FOLDERS_FILE, STEAMAPPS_DIR};
pub use steam::scan_entries;

// ============================================================================
// Core Types
// ============================================================================

/// An installed game found in an app manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Steam App ID
    pub app_id: String,
    /// Display name as shown in the Steam library
    pub name: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.app_id)
    }
}
