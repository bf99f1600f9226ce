use super::trial::Trial;
use crate::Fault;
use crate::evaluation::Outcome;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

/// Shared end of the job queue. Whoever holds the lock receives the next
/// trial, so each trial reaches exactly one worker.
pub type Jobs = Arc<Mutex<Receiver<Trial>>>;

/// A CPU-bound loop that runs trials until the job queue is drained.
///
/// Runs on a blocking thread. Stops early when the result queue closes
/// or after reporting a [`Fault`], since the run is over either way.
pub struct Worker {
    id: usize,
    jobs: Jobs,
    results: Sender<Result<Outcome, Fault>>,
}

impl Worker {
    pub fn new(id: usize, jobs: Jobs, results: Sender<Result<Outcome, Fault>>) -> Self {
        Self { id, jobs, results }
    }

    pub fn run(self) -> usize {
        log::debug!("worker {} started", self.id);
        let mut done = 0;
        while let Some(trial) = self.next() {
            log::trace!("worker {} picked trial {}", self.id, trial.index());
            let result = trial.run();
            let fatal = result.is_err();
            if self.results.blocking_send(result).is_err() || fatal {
                break;
            }
            done += 1;
        }
        log::debug!("worker {} stopped after {} trials", self.id, done);
        done
    }

    fn next(&self) -> Option<Trial> {
        match self.jobs.lock() {
            Ok(mut jobs) => jobs.blocking_recv(),
            Err(_) => None,
        }
    }
}
