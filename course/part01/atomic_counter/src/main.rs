use std::sync::atomic::AtomicUsize;

use atomic_counter::{config::CounterConfig, run_workers, CounterReport};
use tracing::info;

fn main() -> anyhow::Result<()> {
    snippet_tracing::init_tracing()?;

    let CounterConfig {
        workers,
        increments,
    } = CounterConfig::load()?;
    info!(workers, increments, "starting workers");

    let counter = AtomicUsize::new(0);
    let value = run_workers(&counter, workers, increments)?;

    println!("{}", CounterReport { value });

    Ok(())
}
