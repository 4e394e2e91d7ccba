use std::{path::PathBuf, sync::LazyLock};

pub static DEFAULT_GAMEDESK_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    let mut path = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_default();
    path.push("gamedesk");
    path
});

/// Computes the path from the gamedesk config directory based on the arguments.
///
/// Returns a `&Path` referencing the config directory itself if no arguments are passed in, or a
/// `PathBuf` created by joining all of the arguments to the base config directory if at least
/// one argument is passed in.
///
/// # Examples
///
/// ```
/// use gamedesk::gamedesk_path;
///
/// let logs = gamedesk_path!("logs");
/// assert!(logs.ends_with("gamedesk/logs"));
/// ```
#[macro_export]
macro_rules! gamedesk_path {
    () => {
        $crate::paths::DEFAULT_GAMEDESK_PATH.as_path()
    };

    ( $( $path:expr ),+ $(,)? ) => {
        [
            $crate::paths::DEFAULT_GAMEDESK_PATH.as_path(),
            $( std::path::Path::new(&$path) ),+
        ].into_iter().collect::<std::path::PathBuf>()
    };
}

/// Expand a leading `~` to the user's home directory.
///
/// Anything else (including `~user` forms) is returned unchanged.
pub fn expand_home(input: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(input);
    };

    if input == "~" {
        return home;
    }

    match input.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Join a path relative to the user's home directory.
pub fn home_relative(relative: &str) -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(relative)
}
