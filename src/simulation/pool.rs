use super::progress::Progress;
use super::table::Table;
use super::tally::Tally;
use super::trial::Trial;
use super::worker::Worker;
use crate::Fault;
use crate::evaluation::Outcome;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

/// Upper bound on queued trials and queued outcomes.
const CHANNEL_SIZE: usize = 1024;
/// Progress lines per run.
const PROGRESS_TICKS: usize = 10;

/// A fixed-size pool of workers draining a shared trial queue.
///
/// One producer task deals trials into the job queue; `workers` blocking
/// tasks each pull a trial, run it and push its outcome; the caller's
/// task folds exactly one outcome per trial into a [`Tally`].
#[derive(Debug, Clone, Copy)]
pub struct Pool {
    workers: usize,
}

impl Pool {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub async fn simulate(&self, table: &Table, trials: usize, seed: u64) -> Result<Tally, Fault> {
        let capacity = trials.clamp(1, CHANNEL_SIZE);
        let (jobs_tx, jobs_rx) = tokio::sync::mpsc::channel::<Trial>(capacity);
        let (results_tx, results_rx) =
            tokio::sync::mpsc::channel::<Result<Outcome, Fault>>(capacity);
        let jobs = Arc::new(Mutex::new(jobs_rx));
        let mut tasks = Vec::with_capacity(self.workers);
        for id in 0..self.workers {
            let worker = Worker::new(id, jobs.clone(), results_tx.clone());
            tasks.push(tokio::task::spawn_blocking(move || worker.run()));
        }
        drop(results_tx);
        drop(jobs);
        let producer = tokio::spawn(Self::deal(table.clone(), trials, seed, jobs_tx));
        let tally = Self::collect(Tally::new(table.players(), trials), results_rx).await;
        let done = futures::future::join_all(tasks)
            .await
            .into_iter()
            .filter_map(Result::ok)
            .sum::<usize>();
        producer.await.ok();
        log::debug!("{} workers ran {} trials", self.workers, done);
        tally
    }

    async fn deal(table: Table, trials: usize, seed: u64, jobs: Sender<Trial>) {
        for index in 0..trials {
            if jobs.send(table.trial(seed, index)).await.is_err() {
                log::debug!("job queue closed after {} of {} trials", index, trials);
                return;
            }
        }
    }

    /// Drains the result queue once per trial. Dropping the receiver on
    /// return, early or not, tells the workers to stop.
    async fn collect(
        mut tally: Tally,
        mut results: Receiver<Result<Outcome, Fault>>,
    ) -> Result<Tally, Fault> {
        let mut progress = Progress::new(tally.trials(), PROGRESS_TICKS);
        while !tally.is_complete() {
            match results.recv().await {
                Some(Ok(outcome)) => tally.witness(outcome),
                Some(Err(fault)) => return Err(fault),
                None => return Err(Fault::Disconnected),
            }
            progress.tick();
        }
        Ok(tally)
    }
}
