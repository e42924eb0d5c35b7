use crate::Result;
use crate::thread_pool::Completion;

/// the common abstraction of a thread pool that runs to completion.
pub trait ThreadPool: Sized {
    /// launch every worker, return immediately with the signal
    /// that fires once all of them have returned.
    ///
    /// consumes the pool, so it can be started only once.
    fn start(self) -> Result<Completion>;
}

/// The function each worker of a pool runs.
///
/// The pool only knows the index of a worker (`0..worker_count`),
/// it's the caller's duty to hand workers their work
/// (typically a shared channel) and to make them return when it runs out.
pub trait Worker: Send + Sync + 'static {
    /// run as the worker `worker_index`, return when done.
    fn work(&self, worker_index: usize);
}

impl<F> Worker for F
    where
        F: Fn(usize) + Send + Sync + 'static,
{
    fn work(&self, worker_index: usize) {
        self(worker_index)
    }
}

/// A `Worker` that also wants to be notified on every tick,
/// e.g. to report its own progress.
pub trait TickingWorker: Worker {
    /// called on the ticker thread once per tick interval.
    fn on_tick(&self);
}
