use std::time::Duration;

use failure::Fail;

/// The result type used in the pool context.
pub type Result<T> = std::result::Result<T, PoolError>;

/// The Error type of the pool context.
#[derive(Debug, Fail)]
pub enum PoolError {
    #[fail(display = "A pool needs at least one worker, but {} given.", count)]
    /// the configured worker count is zero.
    InvalidWorkerCount {
        /// the rejected count.
        count: usize,
    },
    #[fail(display = "The tick interval must be positive, but {:?} given.", interval)]
    /// the configured tick interval is zero.
    InvalidTickInterval {
        /// the rejected interval.
        interval: Duration,
    },
    #[fail(
    display = "Failed to spawn thread {} because error [{}].",
    thread_name, io_error
    )]
    /// the OS refused to give us a thread.
    FailToSpawn {
        /// name of the thread we tried to spawn.
        thread_name: String,
        #[cause]
        /// the original io exception.
        io_error: std::io::Error,
    },
    /// Some workers unwound instead of returning.
    /// Only reported when the pool runs with `PanicPolicy::Record`.
    #[fail(display = "Workers {:?} panicked.", workers)]
    WorkerPanicked {
        /// indices of the panicked workers, ascending.
        workers: Vec<usize>,
    },
}
