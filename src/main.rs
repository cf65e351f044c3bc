use anyhow::Result;
use clap::{Parser, Subcommand};

use fleetdesk::cli::{handle_fare_command, handle_report_command, FareCommands, ReportArgs};
use fleetdesk::config::{FleetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fleetdesk",
    version,
    about = "Terminal-based back-office reporting tool for fleet operations",
    long_about = "fleetdesk generates fuel expense reports over exported fuel log \
                  snapshots and manages fare-rate settings (base fare and discount \
                  percentage) for a fleet/ride service back office."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the fuel expense report
    #[command(alias = "fuel")]
    Report(ReportArgs),

    /// Fare management commands
    #[command(subcommand)]
    Fare(FareCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FleetPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Report(args) => {
            handle_report_command(&settings, args)?;
        }
        Commands::Fare(cmd) => {
            handle_fare_command(&paths, &settings, cmd)?;
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Tariff history: {}", paths.tariffs_file().display());
            println!("Activity log:   {}", paths.activity_log().display());
            println!("Currency:       {}", settings.currency_symbol);
        }
    }

    Ok(())
}
