use std::thread::{self, JoinHandle};

use log::error;

pub use completion::Completion;
pub use fixed::FixedThreadPool;
pub use pool::{TickingWorker, ThreadPool, Worker};

use crate::{PoolError, Result};

#[macro_use]
mod guard;
mod completion;
mod fixed;
mod pool;
mod ticker;

/// like `thread::spawn`, but named, and failing with a `PoolError` instead of panicking.
pub(crate) fn spawn_named<F>(thread_name: String, f: F) -> Result<JoinHandle<()>>
    where
        F: 'static + Send + FnOnce(),
{
    thread::Builder::new()
        .name(thread_name.clone())
        .spawn(f)
        .map_err(|io_error| {
            error!(target: "app::error", "failed to spawn {}: {}", thread_name, io_error);
            PoolError::FailToSpawn { thread_name, io_error }
        })
}
