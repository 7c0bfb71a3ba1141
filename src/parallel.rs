use std::io::BufRead;
use std::sync::Arc;
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, warn};

use crate::aggregator::{Aggregator, Buckets, Line};
use crate::error::{Error, Result};

/// Reads every line of `reader` and classifies it on a pool of `workers` threads.
///
/// Lines are split on `\n` with a trailing `\r` removed; the bytes are
/// otherwise passed through untouched.
pub fn ingest<R: BufRead>(reader: R, workers: usize, capacity: usize) -> Result<Buckets> {
    let pool = WorkerPool::new(workers, capacity);

    let mut lines = 0_usize;
    for line in reader.split(b'\n') {
        // pool is dropped on error, which closes the queue and joins the workers
        let mut line = line.map_err(Error::Read)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        pool.submit(line)?;
        lines += 1;
    }
    debug!("read {} lines", lines);

    pool.finish()
}

/// Fixed set of threads draining a bounded queue into a shared [`Aggregator`].
pub struct WorkerPool {
    task_tx: Option<Sender<Line>>,
    worker_handles: Vec<thread::JoinHandle<()>>,
    aggregator: Option<Arc<Aggregator>>,
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.task_tx.take();

        for handle in self.worker_handles.drain(..) {
            if handle.join().is_err() {
                warn!("worker panicked during shutdown");
            }
        }
    }
}

impl WorkerPool {
    pub fn new(workers: usize, capacity: usize) -> Self {
        let workers = workers.max(1);
        let (tx, rx) = channel::bounded(capacity);
        let aggregator = Arc::new(Aggregator::new());

        let handles = (0..workers)
            .map(|_| {
                let rx: Receiver<Line> = rx.clone();
                let aggregator = Arc::clone(&aggregator);
                thread::spawn(move || {
                    // recv fails once the queue is closed and empty
                    while let Ok(line) = rx.recv() {
                        aggregator.insert(line);
                    }
                })
            })
            .collect();
        debug!("started {} workers, queue capacity {}", workers, capacity);

        WorkerPool {
            task_tx: Some(tx),
            worker_handles: handles,
            aggregator: Some(aggregator),
        }
    }

    /// Queues one line, blocking while the queue is full.
    ///
    /// Fails once no worker is left to receive it.
    pub fn submit(&self, line: Line) -> Result<()> {
        let Some(tx) = &self.task_tx else {
            return Err(Error::WorkerPanic);
        };
        tx.send(line).map_err(|_| Error::WorkerPanic)
    }

    /// Closes the queue and waits for every worker before handing out the result.
    pub fn finish(mut self) -> Result<Buckets> {
        self.task_tx.take();

        let mut panicked = false;
        for handle in self.worker_handles.drain(..) {
            panicked |= handle.join().is_err();
        }
        if panicked {
            return Err(Error::WorkerPanic);
        }

        // every worker held a clone and they are all joined
        let buckets = self
            .aggregator
            .take()
            .and_then(|aggregator| Arc::try_unwrap(aggregator).ok())
            .ok_or(Error::WorkerPanic)?
            .into_buckets();
        debug!(
            "all workers finished, {} lines in {} buckets",
            buckets.len(),
            buckets.counts().len()
        );
        Ok(buckets)
    }
}
