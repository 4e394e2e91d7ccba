//! Interactive flow: pick a Steam root, pick a game, write its desktop entry
//!
//! The flow is a small state machine over a [`Console`], so it can be driven
//! from a terminal or from a fixed list of inputs.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::desktop::emit_shortcut;
use crate::error::GamedeskError;
use crate::game_finder::{locate_libraries, scan_entries, Entry};
use crate::icons::resolve_largest_icon;
use crate::logging::{log_action, log_info};
use crate::paths::expand_home;

pub const ROOT_PROMPT: &str = "Enter the root directory path: ";
pub const SELECTION_PROMPT: &str = "Choose a game from the list: ";
pub const INVALID_ROOT_MESSAGE: &str = "Invalid directory path. Please try again.";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please enter a number from the list.";
pub const NO_ENTRIES_MESSAGE: &str = "No games found.";

// ============================================================================
// Console Capability
// ============================================================================

/// Everything the flow needs from the user's terminal
pub trait Console {
    /// Show `prompt` and read one line without its line ending.
    /// `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GamedeskError>;
    fn clear(&mut self);
    fn show(&mut self, message: &str);
    fn show_error(&mut self, message: &str);
}

/// Terminal console on stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GamedeskError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt).map_err(|e| GamedeskError::io("Writing prompt", e))?;
        stdout.flush().map_err(|e| GamedeskError::io("Writing prompt", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| GamedeskError::io("Reading input", e))?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn clear(&mut self) {
        // Clear screen and move the cursor home
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }

    fn show(&mut self, message: &str) {
        println!("{}", message);
    }

    fn show_error(&mut self, message: &str) {
        println!("{}", message);
    }
}

// ============================================================================
// State Machine
// ============================================================================

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A desktop entry was written to this path
    Created(PathBuf),
    /// The libraries held no selectable games; nothing was written
    NoEntries,
}

enum State {
    AwaitingRootDir,
    AwaitingSelection(Vec<Entry>),
    Done(Outcome),
}

/// Resolve the typed root directory; `None` means re-prompt.
///
/// Empty input selects `default` without checking it.
pub fn validate_root_dir(input: &str, default: &Path) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return Some(default.to_path_buf());
    }

    let path = expand_home(input);
    path.is_dir().then_some(path)
}

/// Resolve a 1-based menu choice into an index; `None` means re-prompt.
pub fn validate_selection(input: &str, count: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let choice: usize = input.parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

pub struct Driver<'a> {
    config: &'a AppConfig,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Run the flow to completion.
    ///
    /// Invalid input re-prompts indefinitely; closed input or a missing library
    /// configuration ends the run with an error.
    pub fn run(&self, console: &mut dyn Console) -> Result<Outcome, GamedeskError> {
        console.show(&format!(
            "Enter to use default path: {}",
            self.config.default_library_root.display()
        ));

        let mut state = State::AwaitingRootDir;
        loop {
            state = match state {
                State::AwaitingRootDir => self.await_root_dir(console)?,
                State::AwaitingSelection(entries) => self.await_selection(console, entries)?,
                State::Done(outcome) => return Ok(outcome),
            };
        }
    }

    fn await_root_dir(&self, console: &mut dyn Console) -> Result<State, GamedeskError> {
        let input = console
            .read_line(ROOT_PROMPT)?
            .ok_or(GamedeskError::InputClosed)?;

        let Some(root_dir) = validate_root_dir(&input, &self.config.default_library_root) else {
            console.clear();
            console.show_error(INVALID_ROOT_MESSAGE);
            return Ok(State::AwaitingRootDir);
        };
        log_action(&format!("Using Steam root {}", root_dir.display()));

        let libraries = locate_libraries(&root_dir)?;
        let entries = scan_entries(&libraries);
        if entries.is_empty() {
            console.show(NO_ENTRIES_MESSAGE);
            log_info("No games found, nothing written");
            return Ok(State::Done(Outcome::NoEntries));
        }

        console.clear();
        Ok(State::AwaitingSelection(entries))
    }

    fn await_selection(
        &self,
        console: &mut dyn Console,
        entries: Vec<Entry>,
    ) -> Result<State, GamedeskError> {
        for (idx, entry) in entries.iter().enumerate() {
            console.show(&format!("{}. {}", idx + 1, entry.name));
        }

        let input = console
            .read_line(SELECTION_PROMPT)?
            .ok_or(GamedeskError::InputClosed)?;

        let Some(index) = validate_selection(&input, entries.len()) else {
            console.clear();
            console.show_error(INVALID_CHOICE_MESSAGE);
            return Ok(State::AwaitingSelection(entries));
        };

        let selected = &entries[index];
        log_action(&format!("Selected {}", selected));

        let path = self.create_shortcut(selected)?;
        console.clear();
        console.show(&format!("Desktop entry created: {}", path.display()));
        Ok(State::Done(Outcome::Created(path)))
    }

    fn create_shortcut(&self, entry: &Entry) -> Result<PathBuf, GamedeskError> {
        let icon = resolve_largest_icon(&self.config.icon_theme_root, &entry.app_id);
        emit_shortcut(
            &self.config.output_directory,
            entry,
            icon.as_deref(),
            &self.config.launch_command,
        )
    }
}
