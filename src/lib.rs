//! A fixed-size worker pool: it launches a fixed number of worker threads,
//! optionally calls back on a fixed interval while they run,
//! and hands out one `Completion` that fires once all of them have returned.

pub use config::{Config, PanicPolicy};
pub use errors::{PoolError, Result};
pub use thread_pool::{Completion, FixedThreadPool, ThreadPool};

/// About building the pool configuration, and the logging configuration.
pub mod config;
/// the error type.
pub mod errors;
/// About the pool itself.
pub mod thread_pool;
