// Bank Account Demo
// Encapsulation and shared bank state, default configuration.

use anyhow::Result;
use oop_showcase::{run_bank_demo, setup_logging, BankDemoConfig};

fn main() -> Result<()> {
    setup_logging(0, false)?;

    let mut out = std::io::stdout().lock();
    run_bank_demo(&mut out, &BankDemoConfig::default())
}
