//! gamedesk - Steam desktop entry generator
//!
//! Library crate for finding installed Steam games, picking their largest
//! icon and writing `.desktop` launchers, shared with the CLI binary.

#[macro_use]
pub mod paths;

pub mod config;
pub mod desktop;
pub mod driver;
pub mod error;
pub mod game_finder;
pub mod icons;
pub mod logging;
