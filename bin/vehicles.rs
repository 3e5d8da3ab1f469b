// Vehicle Polymorphism Demo

use anyhow::Result;
use oop_showcase::{run_vehicle_demo, setup_logging};

fn main() -> Result<()> {
    setup_logging(0, false)?;

    let mut out = std::io::stdout().lock();
    run_vehicle_demo(&mut out)
}
