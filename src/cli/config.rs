//! Configuration CLI commands

use clap::Subcommand;

use crate::config::paths::WaterfallPaths;
use crate::config::settings::Settings;
use crate::error::WaterfallResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the config path and effective settings
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &WaterfallPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> WaterfallResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Paycheck Waterfall Configuration");
            println!("================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Config file:      {}", paths.settings_file().display());
            if !paths.is_initialized() {
                println!("                  (not written yet, using defaults)");
            }
            println!();
            println!("Settings:");
            println!("  Default percent basis: {}", settings.default_percent_basis);
            println!("  Output format:         {}", settings.output_format);
            println!("  Currency symbol:       {}", settings.currency_symbol);
        }
        ConfigCommands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings already exist at {}. Use --force to overwrite.",
                    paths.settings_file().display()
                );
                return Ok(());
            }

            let fresh = if force { Settings::default() } else { settings.clone() };
            fresh.save(paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
