use std::iter;
use std::sync::Arc;
use std::thread;

use crossbeam_utils::sync::WaitGroup;
use log::{debug, info};

use crate::config::{Config, ConfigOption, with_tick_callback};
use crate::Result;
use crate::thread_pool::{Completion, spawn_named, TickingWorker, ThreadPool, Worker};
use crate::thread_pool::guard::report_panic;
use crate::thread_pool::ticker::Ticker;

const COORDINATOR_THREAD: &str = "tickpool-coordinator";

/// A `ThreadPool` running a fixed number of workers to completion.
///
/// `start` launches `worker_count` threads, each running the same `Worker`
/// with its own index, plus a ticker thread if a tick callback is configured,
/// plus a coordinator thread that waits for every worker to return,
/// then fires the `Completion` and stops the ticker.
///
/// The pool never hands out work: workers fetch it themselves, usually from a
/// shared channel, and return once it's closed and drained.
///
/// # Example
/// ```
/// # use crossbeam_channel::bounded;
/// # use tickpool::config::with_worker_count;
/// # use tickpool::thread_pool::{FixedThreadPool, ThreadPool};
/// let (work, jobs) = bounded::<u32>(16);
/// let pool = FixedThreadPool::with_options(move |_worker: usize| {
///     for job in jobs.iter() {
///         println!("{}", job);
///     }
/// }, vec![with_worker_count(4)]).unwrap();
/// let done = pool.start().unwrap();
/// for job in 0..16 {
///     work.send(job).unwrap();
/// }
/// drop(work);
/// done.wait().unwrap();
/// ```
pub struct FixedThreadPool<W> {
    worker: Arc<W>,
    config: Config,
}

impl<W: Worker> FixedThreadPool<W> {
    /// create a pool, no thread is started until `start`.
    pub fn new(worker: W, config: Config) -> Self {
        Self::from_arc(Arc::new(worker), config)
    }

    /// like `new`, but with a worker you still hold a handle of.
    pub fn from_arc(worker: Arc<W>, config: Config) -> Self {
        FixedThreadPool { worker, config }
    }

    /// create a pool with `Config::build(options)`.
    pub fn with_options<I>(worker: W, options: I) -> Result<Self>
        where
            I: IntoIterator<Item=ConfigOption>,
    {
        Ok(Self::new(worker, Config::build(options)?))
    }

    /// a handle of the worker shared by every worker thread.
    pub fn worker(&self) -> Arc<W> {
        Arc::clone(&self.worker)
    }

    /// the config this pool will start with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn start_worker(&self, worker_index: usize, wg: WaitGroup, completion: Completion) -> Result<()> {
        let worker = Arc::clone(&self.worker);
        let policy = self.config.panic_policy();
        spawn_named(format!("tickpool-worker-{}", worker_index), move || {
            delay! {
                if thread::panicking() {
                    report_panic(&format!("worker {}", worker_index), policy);
                    completion.record_panic(worker_index);
                }
                drop(wg);
            }
            log_mdc::insert("worker", worker_index.to_string());
            debug!("worker {} started.", worker_index);
            worker.work(worker_index);
            debug!("worker {} returned.", worker_index);
        })?;
        Ok(())
    }
}

impl<W: TickingWorker> FixedThreadPool<W> {
    /// create a pool whose tick callback is `worker.on_tick`.
    /// It overrides any `with_tick_callback` in `options`.
    pub fn ticking<I>(worker: W, options: I) -> Result<Self>
        where
            I: IntoIterator<Item=ConfigOption>,
    {
        let worker = Arc::new(worker);
        let ticked = Arc::clone(&worker);
        let options = options
            .into_iter()
            .chain(iter::once(with_tick_callback(move || ticked.on_tick())));
        Ok(Self::from_arc(worker, Config::build(options)?))
    }
}

impl<W: Worker> ThreadPool for FixedThreadPool<W> {
    fn start(mut self) -> Result<Completion> {
        let completion = Completion::new();
        let wg = WaitGroup::new();
        let worker_count = self.config.worker_count();
        info!("starting {} workers.", worker_count);
        for worker_index in 0..worker_count {
            self.start_worker(worker_index, wg.clone(), completion.clone())?;
        }

        let ticker = match self.config.take_tick_callback() {
            Some(callback) => {
                let interval = self.config.tick_interval();
                debug!("ticking every {:?}.", interval);
                Some(Ticker::start(interval, callback, self.config.panic_policy())?)
            }
            None => None,
        };

        let signal = completion.clone();
        spawn_named(COORDINATOR_THREAD.to_owned(), move || {
            wg.wait();
            info!("all {} workers returned.", worker_count);
            signal.fire();
            if let Some(ticker) = ticker {
                ticker.stop();
            }
        })?;
        Ok(completion)
    }
}
