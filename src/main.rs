//! gamedesk - Steam desktop entry generator
//!
//! Asks for a Steam root, lists the installed games and writes a `.desktop`
//! launcher for the chosen one.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gamedesk::config::AppConfig;
use gamedesk::driver::{Driver, Outcome, StdConsole};
use gamedesk::gamedesk_path;
use gamedesk::logging::{init_logger, log_error, log_info};

#[derive(Parser, Debug)]
#[command(name = "gamedesk", version, about = "Create desktop launchers for installed Steam games")]
struct Cli {
    /// Configuration file to use instead of the default one
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Icon theme directory to search for game icons
    #[arg(long, value_name = "DIR")]
    icon_root: Option<PathBuf>,

    /// Directory the desktop entry is written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Save the effective configuration before running
    #[arg(long)]
    save_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging (writes to <config dir>/gamedesk/logs/)
    init_logger(&gamedesk_path!("logs"));
    log_info("gamedesk starting up...");

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load_from(&config_path);
    if let Some(icon_root) = cli.icon_root {
        config.icon_theme_root = icon_root;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_directory = output_dir;
    }

    if cli.save_config {
        match config.save_to(&config_path) {
            Ok(()) => log_info(&format!("Saved configuration to {}", config_path.display())),
            Err(e) => log_error(&format!(
                "Failed to save configuration to {}: {}",
                config_path.display(),
                e
            )),
        }
    }

    match Driver::new(&config).run(&mut StdConsole) {
        Ok(Outcome::Created(path)) => {
            log_info(&format!("Finished, created {}", path.display()));
            ExitCode::SUCCESS
        }
        Ok(Outcome::NoEntries) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
