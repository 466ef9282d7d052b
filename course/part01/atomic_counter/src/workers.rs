use std::thread;

use tracing::{debug, debug_span, instrument, warn};

use crate::counter::{increment_n_times, SharedCounter};

#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("worker {worker} panicked before finishing its increments")]
    WorkerPanicked { worker: usize },
}

/// Runs `workers` threads that each add `increments` to `counter`, waits for
/// all of them, then returns what the counter reads.
///
/// The threads are scoped to this call, so they only borrow the counter.
/// Every spawned worker is joined even when one of them panics or a later
/// spawn fails. A spawn failure is reported ahead of any panic.
#[instrument(skip(counter))]
pub fn run_workers<C>(
    counter: &C,
    workers: usize,
    increments: usize,
) -> Result<usize, CounterError>
where
    C: SharedCounter,
{
    run_workers_with(counter, workers, increments, |worker| {
        thread::Builder::new().name(format!("worker-{worker}"))
    })
}

fn run_workers_with<C, B>(
    counter: &C,
    workers: usize,
    increments: usize,
    builder: B,
) -> Result<usize, CounterError>
where
    C: SharedCounter,
    B: Fn(usize) -> thread::Builder,
{
    thread::scope(|s| -> Result<usize, CounterError> {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;

        for worker in 0..workers {
            let spawned = builder(worker).spawn_scoped(s, move || {
                debug_span!("worker", worker).in_scope(|| {
                    increment_n_times(counter, increments);
                    debug!(increments, "worker finished");
                })
            });

            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(err) => {
                    warn!(worker, %err, "failed to spawn worker");
                    spawn_error = Some(err);
                    break;
                }
            }
        }

        let mut panicked = None;
        for (worker, handle) in handles {
            if handle.join().is_err() {
                warn!(worker, "worker panicked");
                panicked.get_or_insert(worker);
            }
        }

        if let Some(err) = spawn_error {
            return Err(err.into());
        }

        match panicked {
            Some(worker) => Err(CounterError::WorkerPanicked { worker }),
            None => Ok(counter.get()),
        }
    })
}
