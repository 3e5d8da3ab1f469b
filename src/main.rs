use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use oop_showcase::{
    run_bank_demo, run_vehicle_demo, setup_logging, BankDemoConfig, DEFAULT_BANK_NAME,
    DEFAULT_RENAMED_BANK_NAME,
};

#[derive(Parser)]
#[command(
    name = "oop-showcase",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bank account and vehicle hierarchy demonstrations"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name the demo bank opens with
    #[arg(long, global = true, default_value = DEFAULT_BANK_NAME)]
    bank_name: String,

    /// Name the demo bank is changed to
    #[arg(long, global = true, default_value = DEFAULT_RENAMED_BANK_NAME)]
    renamed_bank_name: String,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the bank account demo
    Bank,

    /// Run the vehicle polymorphism demo
    Vehicles,

    /// Run both demos (default)
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet)?;

    let config = BankDemoConfig {
        bank_name: cli.bank_name,
        renamed_bank_name: cli.renamed_bank_name,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::All) {
        Commands::Bank => run_bank_demo(&mut out, &config)?,
        Commands::Vehicles => run_vehicle_demo(&mut out)?,
        Commands::All => {
            run_bank_demo(&mut out, &config)?;
            writeln!(out).context("Failed to write to stdout")?;
            run_vehicle_demo(&mut out)?;
        }
    }

    Ok(())
}
