//! gamedesk Logging System
//!
//! Writes timestamped lines to a per-run log file with a short system
//! information header. Warnings and errors are also echoed to stderr so they
//! stay out of the interactive menu on stdout.

use chrono::Local;
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static LOGGER: OnceLock<Mutex<GameLogger>> = OnceLock::new();

// ============================================================================
// System Information Detection
// ============================================================================

#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub app_version: String,
    pub distro: String,
    pub distro_version: String,
    pub session_type: String,
    pub desktop_env: String,
}

impl SystemInfo {
    pub fn detect() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            distro: read_os_release("NAME").unwrap_or_else(|| "Unknown".to_string()),
            distro_version: read_os_release("VERSION_ID").unwrap_or_default(),
            session_type: std::env::var("XDG_SESSION_TYPE")
                .unwrap_or_else(|_| "Unknown".to_string()),
            desktop_env: detect_desktop_env(),
        }
    }

    pub fn to_log_header(&self) -> String {
        format!(
r#"================================================================================
gamedesk Log - {}
================================================================================
Application:   gamedesk v{}
System Info:
  Distro:      {} {}
  Session:     {}
  Desktop:     {}
================================================================================
"#,
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.app_version,
            self.distro,
            self.distro_version,
            self.session_type,
            self.desktop_env,
        )
    }
}

fn read_os_release(key: &str) -> Option<String> {
    let file = File::open("/etc/os-release").ok()?;
    let prefix = format!("{}=", key);
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .find_map(|line| {
            line.strip_prefix(&prefix)
                .map(|value| value.trim_matches('"').to_string())
        })
}

fn detect_desktop_env() -> String {
    ["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION", "XDG_SESSION_DESKTOP"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| "Unknown".to_string())
}

// ============================================================================
// Log Levels
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Info,
    Action, // User choices (directory picked, game selected)
    Warning,
    Error,
}

impl LogLevel {
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO]",
            LogLevel::Action => "[ACTION]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Error => "[ERROR]",
        }
    }

    fn echoes_to_stderr(&self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

// ============================================================================
// gamedesk Logger
// ============================================================================

pub struct GameLogger {
    log_file: Option<File>,
    log_path: Option<PathBuf>,
}

impl GameLogger {
    /// Logger that writes to a fresh timestamped file inside `log_dir`.
    pub fn new(log_dir: &Path) -> Self {
        let _ = fs::create_dir_all(log_dir);

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("gamedesk_{}.log", timestamp));

        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .ok();

        let log_path = log_file.as_ref().map(|_| log_path);
        let mut logger = Self { log_file, log_path };

        let header = SystemInfo::detect().to_log_header();
        logger.write_file(&header);

        logger
    }

    /// Logger with no backing file; only the stderr echo is active.
    pub fn detached() -> Self {
        Self {
            log_file: None,
            log_path: None,
        }
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    fn write_file(&mut self, msg: &str) {
        if let Some(ref mut file) = self.log_file {
            let _ = writeln!(file, "{}", msg);
            let _ = file.flush();
        }
    }

    pub fn log(&mut self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        let formatted = format!("[{}] {} {}", timestamp, level.prefix(), message);
        self.write_file(&formatted);

        if level.echoes_to_stderr() {
            eprintln!("{} {}", level.prefix(), message);
        }
    }
}

// ============================================================================
// Global Logger Access
// ============================================================================

/// Initialize the global logger (call once at startup).
///
/// Returns the path of the log file if one could be opened.
pub fn init_logger(log_dir: &Path) -> Option<PathBuf> {
    let logger = LOGGER.get_or_init(|| Mutex::new(GameLogger::new(log_dir)));
    logger.lock().log_path().map(Path::to_path_buf)
}

/// Get the global logger instance
fn logger() -> &'static Mutex<GameLogger> {
    LOGGER.get_or_init(|| Mutex::new(GameLogger::detached()))
}

// ============================================================================
// Convenience Logging Functions
// ============================================================================

pub fn log_info(message: &str) {
    logger().lock().log(LogLevel::Info, message);
}

pub fn log_action(message: &str) {
    logger().lock().log(LogLevel::Action, message);
}

pub fn log_warning(message: &str) {
    logger().lock().log(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    logger().lock().log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_writes_header_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = GameLogger::new(dir.path());
        logger.log(LogLevel::Action, "Selected Half-Life 2");

        let path = logger.log_path().unwrap().to_path_buf();
        assert!(path.starts_with(dir.path()));

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("gamedesk Log - "));
        assert!(content.contains("[ACTION] Selected Half-Life 2"));
    }

    #[test]
    fn test_detached_logger_has_no_file() {
        let mut logger = GameLogger::detached();
        logger.log(LogLevel::Info, "nothing to see");
        assert!(logger.log_path().is_none());
    }

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Info.prefix(), "[INFO]");
        assert_eq!(LogLevel::Warning.prefix(), "[WARNING]");
        assert!(LogLevel::Error.echoes_to_stderr());
        assert!(!LogLevel::Action.echoes_to_stderr());
    }
}
