//! Desktop entry (`.desktop`) rendering and writing

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::error::GamedeskError;
use crate::game_finder::Entry;
use crate::logging::log_info;

pub const DESKTOP_EXTENSION: &str = "desktop";

/// Execute bits for owner, group and others
const EXEC_BITS: u32 = 0o111;

/// A rendered desktop entry and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    pub path: PathBuf,
    pub content: String,
}

impl DesktopEntry {
    pub fn new(output_dir: &Path, entry: &Entry, icon: Option<&Path>, launch_command: &str) -> Self {
        Self {
            path: output_dir.join(file_name_for(&entry.name)),
            content: render(entry, icon, launch_command),
        }
    }

    /// Write the file (overwriting) and add execute permission for everyone
    pub fn write(&self) -> Result<(), GamedeskError> {
        let err = |e: std::io::Error| GamedeskError::shortcut_write(&self.path, e);

        let mut file = fs::File::create(&self.path).map_err(err)?;
        file.write_all(self.content.as_bytes()).map_err(err)?;

        let mut perms = fs::metadata(&self.path).map_err(err)?.permissions();
        perms.set_mode(perms.mode() | EXEC_BITS);
        fs::set_permissions(&self.path, perms).map_err(err)?;

        Ok(())
    }
}

/// `<name with spaces as underscores>.desktop`
///
/// `/` and a leading `.` also become `_` so the file always lands directly in
/// the output directory.
pub fn file_name_for(name: &str) -> String {
    let mut stem = name.replace([' ', '/'], "_");
    if stem.starts_with('.') {
        stem.replace_range(..1, "_");
    }
    format!("{}.{}", stem, DESKTOP_EXTENSION)
}

/// Escape a value for a Desktop Entry `string`/`localestring` key
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render the desktop entry text for a game
pub fn render(entry: &Entry, icon: Option<&Path>, launch_command: &str) -> String {
    let icon = icon
        .map(|p| escape_value(&p.to_string_lossy()))
        .unwrap_or_default();
    format!(
        r#"[Desktop Entry]
Name={}
Comment=Play this game on Steam
Exec={} steam://rungameid/{}
Icon={}
Terminal=false
Type=Application
Categories=Game;
"#,
        escape_value(&entry.name),
        launch_command,
        entry.app_id,
        icon
    )
}

/// Render and write the desktop entry for `entry` into `output_dir`.
///
/// Returns the path of the written file.
pub fn emit_shortcut(
    output_dir: &Path,
    entry: &Entry,
    icon: Option<&Path>,
    launch_command: &str,
) -> Result<PathBuf, GamedeskError> {
    fs::create_dir_all(output_dir).map_err(|e| GamedeskError::shortcut_write(output_dir, e))?;

    let desktop = DesktopEntry::new(output_dir, entry, icon, launch_command);
    desktop.write()?;
    log_info(&format!("Wrote desktop entry {}", desktop.path.display()));
    Ok(desktop.path)
}
