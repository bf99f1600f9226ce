//! Equity Binary
//!
//! Simulates the configured hands and prints each player's win
//! probability plus the split probability.
//!
//! Options: --workers, --trials, --hand, --board, --seed, --json, -v

use clap::Parser;
use holdem_equity::cli::Args;
use holdem_equity::simulation::Pool;
use holdem_equity::simulation::Report;
use holdem_equity::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level());
    let config = args.config()?;
    let table = config.table()?;
    log::info!(
        "simulating {} trials of {} players on {} workers (seed {})",
        config.trials,
        table.players(),
        config.workers,
        config.seed
    );
    let start = std::time::Instant::now();
    let tally = Pool::new(config.workers)
        .simulate(&table, config.trials, config.seed)
        .await?;
    log::info!("simulation took {:?}", start.elapsed());
    let report = Report::new(&table, &tally, config.seed);
    match args.json {
        true => println!("{}", report.json()?),
        false => println!("{}", report),
    }
    Ok(())
}
