//! Petrobahia order batch runner
//!
//! Registers the fixture's customers, prices its orders and prints a receipt.
//!
//! Use `-f` to load a YAML fixture instead of the built-in sample
//! Use `-c` to choose the file customers are appended to

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing::{info, warn};

use petrobahia::{
    config::Config,
    customers::{CustomerRepository, CustomersService},
    fixtures::Fixture,
    logging,
    orders::OrderProcessor,
    receipt::Receipt,
};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    logging::init_subscriber(&config.logging)?;

    let fixture = match &config.fixture {
        Some(path) => Fixture::from_path(path)?,
        None => Fixture::sample(),
    };

    info!(
        customers = fixture.customers.len(),
        orders = fixture.orders.len(),
        "starting batch"
    );

    let service = CustomersService::new(CustomerRepository::new(&config.customers_file))?;

    for customer in &fixture.customers {
        match service.register(customer) {
            Ok(()) => info!(customer = %customer.name, "customer ok"),
            Err(error) => warn!(customer = %customer.name, %error, "customer has problems"),
        }
    }

    let start = Instant::now();
    let summary = OrderProcessor::new().process_all(&fixture.orders);
    let elapsed = start.elapsed();

    let receipt = Receipt::from_summary(&summary);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    info!(total = %summary.total(), "batch finished");

    Ok(())
}
