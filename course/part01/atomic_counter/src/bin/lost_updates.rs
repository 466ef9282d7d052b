use atomic_counter::{config::CounterConfig, run_workers, LostUpdatesReport, RacyCounter};
use tracing::info;

fn main() -> anyhow::Result<()> {
    snippet_tracing::init_tracing()?;

    let config = CounterConfig::load()?;
    info!(?config, "starting workers with a load/store counter");

    let counter = RacyCounter::new();
    let value = run_workers(&counter, config.workers, config.increments)?;

    println!(
        "{}",
        LostUpdatesReport {
            value,
            expected: config.expected_total(),
        }
    );

    Ok(())
}
