// OOP Showcase - Core Library
// Bank accounts (encapsulation, shared state) and a vehicle hierarchy
// (inheritance, polymorphism), used by the CLI and the demo binaries.

pub mod entities;
pub mod vehicles;
pub mod demo;
pub mod logging;

// Re-export commonly used types
pub use entities::{
    Account, AccountError, AccountSummary, LedgerEntry, Receipt, TransactionKind,
    Bank, BankRenamed, DEFAULT_BANK_NAME,
};
pub use vehicles::{
    Vehicle, VehicleCore, VehicleEvent, VehicleKind, Fleet,
    Car, Boat, Plane, Bicycle,
    ROAD_SPEED_CAP, WATER_SPEED_CAP, PEDAL_SPEED_CAP, CRUISING_ALTITUDE,
};
pub use demo::{
    BankDemoConfig, DEFAULT_RENAMED_BANK_NAME,
    run_bank_demo, run_vehicle_demo, demo_fleet,
};
pub use logging::setup_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
