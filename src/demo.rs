// 🎬 Demonstration Drivers
// Fixed, linear walkthroughs of the bank and vehicle models.
//
// Drivers write to any `io::Write` so the binaries can target stdout and the
// tests can capture the transcript.

use anyhow::{Context, Result};
use std::io::Write;

use crate::entities::{Account, Bank, DEFAULT_BANK_NAME};
use crate::vehicles::{Bicycle, Boat, Car, Fleet, Plane, VehicleEvent};

/// Bank name the demo switches to halfway through
pub const DEFAULT_RENAMED_BANK_NAME: &str = "Python International Bank";

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDemoConfig {
    /// Name the bank opens with
    pub bank_name: String,

    /// Name the bank is changed to
    pub renamed_bank_name: String,
}

impl Default for BankDemoConfig {
    fn default() -> Self {
        BankDemoConfig {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            renamed_bank_name: DEFAULT_RENAMED_BANK_NAME.to_string(),
        }
    }
}

// ============================================================================
// BANK DEMO
// ============================================================================

pub fn run_bank_demo<W: Write>(out: &mut W, config: &BankDemoConfig) -> Result<()> {
    tracing::info!(bank = %config.bank_name, "starting bank demo");

    let bank = Bank::new(config.bank_name.clone());
    let mut alice = bank.open_account_with_balance("Alice Smith", 1000.0);
    let mut bob = bank.open_account("Bob Johnson");

    writeln!(out, "===== Initial Account Information =====")?;
    write_both(out, &alice, &bob)?;

    writeln!(out, "\n===== Performing Transactions =====")?;
    write_outcome(out, alice.deposit(500.0))?;
    write_outcome(out, alice.withdraw(200.0))?;

    write_outcome(out, bob.deposit(100.0))?;
    write_outcome(out, bob.withdraw(50.0))?;
    // Overdraft: rejected, balance stays at 50
    write_outcome(out, bob.withdraw(100.0))?;

    writeln!(out, "\n===== Updated Account Information =====")?;
    write_both(out, &alice, &bob)?;

    writeln!(out, "\n===== Changing Bank Name =====")?;
    let renamed = bank.change_name(config.renamed_bank_name.clone());
    writeln!(out, "{}", renamed)?;

    writeln!(out, "\n===== Final Account Information =====")?;
    write_both(out, &alice, &bob)?;

    out.flush().context("Failed to flush bank demo output")?;
    Ok(())
}

fn write_both<W: Write>(out: &mut W, first: &Account, second: &Account) -> Result<()> {
    writeln!(out, "{}", first.display_info())?;
    writeln!(out, "\n")?;
    writeln!(out, "{}", second.display_info())?;
    Ok(())
}

fn write_outcome<W, T, E>(out: &mut W, outcome: std::result::Result<T, E>) -> Result<()>
where
    W: Write,
    T: std::fmt::Display,
    E: std::fmt::Display,
{
    match outcome {
        Ok(receipt) => writeln!(out, "{}", receipt)?,
        Err(err) => writeln!(out, "Error: {}", err)?,
    }
    Ok(())
}

// ============================================================================
// VEHICLE DEMO
// ============================================================================

/// The four vehicles the demo drives, in demo order
pub fn demo_fleet() -> Fleet {
    let mut fleet = Fleet::new();
    fleet.add(Car::new("Family Sedan", 180, "blue", "gasoline"));
    fleet.add(Boat::new("Luxury Yacht", 70, "white", "motorboat"));
    fleet.add(Plane::new("Commercial Jet", 900, "silver", "Delta Airlines"));
    fleet.add(Bicycle::new("Trail Explorer", 50, "green", "mountain bike"));
    fleet
}

pub fn run_vehicle_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut fleet = demo_fleet();
    tracing::info!(vehicles = fleet.len(), "starting vehicle demo");

    writeln!(out, "===== VEHICLE DESCRIPTIONS =====")?;
    for line in fleet.describe_all() {
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "\n===== VEHICLE MOVEMENT (POLYMORPHISM DEMO) =====")?;
    write_events(out, &fleet.travel_all())?;

    writeln!(out, "\n===== SPECIAL VEHICLE ACTIONS =====")?;
    write_events(out, &fleet.signature_actions())?;

    writeln!(out, "\n===== STOPPING ALL VEHICLES =====")?;
    write_events(out, &fleet.stop_all())?;

    out.flush().context("Failed to flush vehicle demo output")?;
    Ok(())
}

fn write_events<W: Write>(out: &mut W, events: &[VehicleEvent]) -> Result<()> {
    for event in events {
        writeln!(out, "{}", event)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
