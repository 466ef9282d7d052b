pub mod config;
pub mod counter;
pub mod report;
pub mod workers;

pub use counter::{increment_n_times, RacyCounter, SharedCounter};
pub use report::{CounterReport, LostUpdatesReport};
pub use workers::{run_workers, CounterError};
