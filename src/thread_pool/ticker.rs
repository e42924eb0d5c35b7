use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender, TryRecvError};
use log::{debug, error};

use crate::config::{PanicPolicy, TickCallback};
use crate::Result;
use crate::thread_pool::guard::report_panic;
use crate::thread_pool::spawn_named;

const TICKER_THREAD: &str = "tickpool-ticker";

/// The thread calling the tick callback once per interval.
///
/// The callback runs on the ticker thread itself, so a slow callback delays
/// the next tick, and the ticks missed meanwhile are dropped.
pub(crate) struct Ticker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    pub(crate) fn start(interval: Duration, mut callback: TickCallback, policy: PanicPolicy) -> Result<Self> {
        let (stop, stopped) = bounded::<()>(0);
        let handle = spawn_named(TICKER_THREAD.to_owned(), move || {
            delay! {
                if thread::panicking() {
                    report_panic("the tick callback", policy);
                }
            }
            let ticks = tick(interval);
            loop {
                select! {
                    recv(ticks) -> _ => {
                        // both may be ready at once, stopping wins.
                        if let Err(TryRecvError::Disconnected) = stopped.try_recv() {
                            break;
                        }
                        callback();
                    },
                    recv(stopped) -> _ => break,
                }
            }
            debug!("ticker stopped.");
        })?;
        Ok(Ticker { stop, handle })
    }

    /// Stop ticking and wait for the callback in flight, if any.
    /// No callback runs after this returns.
    pub(crate) fn stop(self) {
        drop(self.stop);
        if self.handle.join().is_err() {
            error!(target: "app::error", "the ticker ended by a panic.");
        }
    }
}
