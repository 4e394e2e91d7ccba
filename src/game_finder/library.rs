//! Steam library folder discovery
//!
//! Reads `libraryfolders.vdf` from a steamapps directory and returns the
//! `steamapps` directory of every library it declares.

use std::fs;
use std::path::{Path, PathBuf};

use super::vdf;
use crate::error::GamedeskError;
use crate::logging::log_info;

/// Library configuration file expected at the top of the root directory
pub const LIBRARY_FOLDERS_FILE: &str = "libraryfolders.vdf";

/// Subdirectory of every library root that holds the app manifests
pub const STEAMAPPS_DIR: &str = "steamapps";

/// Locate every library declared in `<root_dir>/libraryfolders.vdf`.
///
/// Each `"path"` line yields `<value>/steamapps`, in file order. Duplicates are
/// kept. A missing or unreadable file is fatal for the run.
pub fn locate_libraries(root_dir: &Path) -> Result<Vec<PathBuf>, GamedeskError> {
    let vdf_path = root_dir.join(LIBRARY_FOLDERS_FILE);
    let content = fs::read_to_string(&vdf_path)
        .map_err(|e| GamedeskError::library_config(&vdf_path, e))?;

    let libraries = parse_library_folders(&content);

    log_info(&format!(
        "Found {} library folder(s) in {}",
        libraries.len(),
        vdf_path.display()
    ));
    Ok(libraries)
}

/// Extract the steamapps directories declared in `libraryfolders.vdf` content
pub fn parse_library_folders(content: &str) -> Vec<PathBuf> {
    vdf::pairs(content)
        .filter(|kv| kv.key == "path")
        .map(|kv| PathBuf::from(kv.value).join(STEAMAPPS_DIR))
        .collect()
}
