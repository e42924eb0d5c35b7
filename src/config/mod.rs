use std::fmt;
use std::time::Duration;

use crate::errors::{PoolError, Result};

/// the ready-made `log4rs` configuration.
pub mod log4rs;

const DEFAULT_WORKER_COUNT: usize = 15;
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

/// The callback invoked on every tick.
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// An override applied to the default `Config`, see `Config::build`.
pub type ConfigOption = Box<dyn FnOnce(&mut Config)>;

/// What happens when a worker (or the tick callback) panics.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum PanicPolicy {
    /// log the panic, then abort the whole process.
    Abort,
    /// log the panic, let the pool complete,
    /// and report the panicked workers through `Completion::wait`.
    Record,
}

impl Default for PanicPolicy {
    fn default() -> Self {
        PanicPolicy::Abort
    }
}

/// The configuration of a `FixedThreadPool`.
///
/// It can only be created by `Config::default` or `Config::build`,
/// so a `Config` you hold is always valid.
pub struct Config {
    worker_count: usize,
    tick_interval: Duration,
    tick_callback: Option<TickCallback>,
    panic_policy: PanicPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_count: DEFAULT_WORKER_COUNT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            tick_callback: None,
            panic_policy: PanicPolicy::default(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("worker_count", &self.worker_count)
            .field("tick_interval", &self.tick_interval)
            .field("tick_callback", &self.tick_callback.as_ref().map(|_| "<callback>"))
            .field("panic_policy", &self.panic_policy)
            .finish()
    }
}

impl Config {
    /// Start from the default config, apply `options` from left to right
    /// (the later one wins), then validate the result.
    ///
    /// # Example
    /// ```
    /// # use std::time::Duration;
    /// # use tickpool::config::*;
    /// let config = Config::build(vec![
    ///     with_worker_count(4),
    ///     with_tick_interval(Duration::from_millis(100)),
    ///     with_worker_count(8),
    /// ]).unwrap();
    /// assert_eq!(8, config.worker_count());
    /// ```
    pub fn build<I>(options: I) -> Result<Self>
        where
            I: IntoIterator<Item=ConfigOption>,
    {
        let mut config = Config::default();
        for option in options {
            option(&mut config);
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(PoolError::InvalidWorkerCount { count: self.worker_count });
        }
        if self.tick_interval == Duration::from_secs(0) {
            return Err(PoolError::InvalidTickInterval { interval: self.tick_interval });
        }
        Ok(())
    }

    /// how many workers the pool launches.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// the period between two tick callback invocations.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// whether a ticker will be launched at all.
    pub fn has_tick_callback(&self) -> bool {
        self.tick_callback.is_some()
    }

    /// what to do with a panicking worker.
    pub fn panic_policy(&self) -> PanicPolicy {
        self.panic_policy
    }

    pub(crate) fn take_tick_callback(&mut self) -> Option<TickCallback> {
        self.tick_callback.take()
    }
}

/// set the number of workers launched by `start`.
pub fn with_worker_count(worker_count: usize) -> ConfigOption {
    Box::new(move |config: &mut Config| config.worker_count = worker_count)
}

/// set the period of the tick callback.
pub fn with_tick_interval(tick_interval: Duration) -> ConfigOption {
    Box::new(move |config: &mut Config| config.tick_interval = tick_interval)
}

/// set the callback invoked on every tick.
/// Without one, no ticker is launched.
pub fn with_tick_callback<F>(callback: F) -> ConfigOption
    where
        F: FnMut() + Send + 'static,
{
    Box::new(move |config: &mut Config| config.tick_callback = Some(Box::new(callback)))
}

/// set the `PanicPolicy`.
pub fn with_panic_policy(panic_policy: PanicPolicy) -> ConfigOption {
    Box::new(move |config: &mut Config| config.panic_policy = panic_policy)
}
