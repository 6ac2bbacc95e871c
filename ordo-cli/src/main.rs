mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ordo")]
#[command(about = "Warm up and inspect the ordo calendar cache")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pre-build calendars into the cache
    Warmup {
        /// First year to build (defaults to last year)
        #[arg(long)]
        from_year: Option<i32>,

        /// Last year to build (defaults to next year)
        #[arg(long)]
        to_year: Option<i32>,

        /// Rite to build for (defaults to the configured one)
        #[arg(long)]
        rite: Option<String>,

        /// Locale to build for (defaults to the configured one)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Show cache contents and location
    Status,
    /// Clear the calendar cache
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Warmup {
            from_year,
            to_year,
            rite,
            locale,
        } => commands::warmup::run(from_year, to_year, rite, locale),
        Commands::Status => commands::status::run(),
        Commands::Clear => commands::clear::run(),
    }
}
