use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paycheck_waterfall::cli::{
    handle_allocate_command, handle_config_command, handle_demo_command, AllocateArgs,
    ConfigCommands, OutputArgs,
};
use paycheck_waterfall::config::{Settings, WaterfallPaths};

#[derive(Parser)]
#[command(
    name = "waterfall",
    author = "Kaylee Beyene",
    version,
    about = "Split a paycheck across bills, goals, and guilt-free spending",
    long_about = "Paycheck Waterfall funds your bills in order, then your savings \
                  goals, and tells you how much is left to spend guilt-free."
)]
struct Cli {
    /// Log allocation details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a paycheck from a plan file or flags
    #[command(alias = "run")]
    Allocate(AllocateArgs),

    /// Allocate a built-in example paycheck
    Demo(OutputArgs),

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = WaterfallPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Allocate(args)) => {
            handle_allocate_command(&settings, args)?;
        }
        Some(Commands::Demo(output)) => {
            handle_demo_command(&settings, output)?;
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &settings, command)?;
        }
        None => {
            println!("Paycheck Waterfall - split a paycheck across bills and goals");
            println!();
            println!("Run 'waterfall --help' for usage information.");
            println!("Run 'waterfall demo' to see an example allocation.");
        }
    }

    Ok(())
}
