//! Icon lookup in Steam's hicolor icon theme
//!
//! Steam drops `steam_icon_<appid>.png` into `<theme>/<W>x<H>/apps/` for each
//! size it has. The largest size that has the file wins.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::logging::{log_info, log_warning};

/// A size directory of the icon theme that has an `apps` folder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IconCandidate {
    pub max_dimension: u64,
    pub dir_name: String,
}

/// File name Steam uses for a game's icon
pub fn icon_file_name(app_id: &str) -> String {
    format!("steam_icon_{}.png", app_id)
}

/// Parse a `WIDTHxHEIGHT` directory name into `max(width, height)`.
///
/// Dimensions wider than `u64` are not treated as sizes.
pub fn parse_size_dir(name: &str) -> Option<u64> {
    let (width, height) = name.split_once('x')?;
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(width) || !is_digits(height) {
        return None;
    }
    Some(width.parse::<u64>().ok()?.max(height.parse::<u64>().ok()?))
}

/// Size directories of the theme, largest first.
///
/// Ties on size are broken by directory name, descending, so the order is the
/// same on every run. An unreadable theme root gives no candidates.
pub fn icon_candidates(theme_root: &Path) -> Vec<IconCandidate> {
    let mut candidates = Vec::new();

    for item in WalkDir::new(theme_root).min_depth(1).max_depth(1) {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                log_warning(&format!("Cannot read icon theme {}: {}", theme_root.display(), e));
                continue;
            }
        };

        let Some(dir_name) = item.file_name().to_str() else {
            continue;
        };
        let Some(max_dimension) = parse_size_dir(dir_name) else {
            continue;
        };

        if item.path().join("apps").is_dir() {
            candidates.push(IconCandidate {
                max_dimension,
                dir_name: dir_name.to_string(),
            });
        }
    }

    candidates.sort_by(|a, b| b.cmp(a));
    candidates
}

/// Find the largest `steam_icon_<app_id>.png` in the theme.
///
/// Returns `None` when no size directory has the icon; that is not an error.
pub fn resolve_largest_icon(theme_root: &Path, app_id: &str) -> Option<PathBuf> {
    let file_name = icon_file_name(app_id);

    let found = icon_candidates(theme_root)
        .into_iter()
        .map(|c| theme_root.join(c.dir_name).join("apps").join(&file_name))
        .find(|path| path.is_file());

    match &found {
        Some(path) => log_info(&format!("Using icon {}", path.display())),
        None => log_info(&format!("No icon found for app {}", app_id)),
    }
    found
}
