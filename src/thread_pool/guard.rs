use std::process;

use log::error;

use crate::config::PanicPolicy;

/// runs the wrapped closure when dropped, even while unwinding.
pub(crate) struct Delayed(Option<Box<dyn FnOnce() + Send>>);

impl Drop for Delayed {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f()
        }
    }
}

impl Delayed {
    pub(crate) fn new(f: Box<dyn FnOnce() + Send>) -> Self {
        Delayed(Some(f))
    }
}

/// run the body when the enclosing scope ends, however it ends.
macro_rules! delay {
    ($($body: tt)*) => {
        let __delayed__ = $crate::thread_pool::guard::Delayed::new(Box::new(move || {
            $($body)*
        }));
    }
}

/// Called from a `Delayed` while `who` is unwinding.
pub(crate) fn report_panic(who: &str, policy: PanicPolicy) {
    error!(target: "app::error", "{} panicked.", who);
    if policy == PanicPolicy::Abort {
        error!(target: "app::error", "{} left the pool abnormally, aborting.", who);
        process::abort();
    }
}
