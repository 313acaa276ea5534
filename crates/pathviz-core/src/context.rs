//! Cooperative cancellation: [`Context`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct Inner {
    done: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag. Besides polling [`is_done`](Context::is_done),
/// a task can [`sleep`](Context::sleep), which returns early as soon as the
/// token is cancelled.
#[derive(Clone, Debug, Default)]
pub struct Context {
    inner: Arc<Inner>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.inner.done.load(Ordering::Acquire)
    }

    /// Request cancellation and wake any sleeper.
    pub fn cancel(&self) {
        self.inner.done.store(true, Ordering::Release);
        let _guard = self.inner.lock.lock();
        self.inner.wake.notify_all();
    }

    /// Wait for `dur` or until cancelled, whichever comes first.
    ///
    /// Returns `true` if the full duration elapsed without cancellation.
    pub fn sleep(&self, dur: Duration) -> bool {
        if dur.is_zero() {
            return !self.is_done();
        }
        let deadline = Instant::now() + dur;
        let mut guard = self.inner.lock.lock();
        while !self.is_done() {
            if self.inner.wake.wait_until(&mut guard, deadline).timed_out() {
                break;
            }
        }
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_cancellation() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }

    #[test]
    fn sleep_runs_to_completion() {
        let ctx = Context::new();
        let t0 = Instant::now();
        assert!(ctx.sleep(Duration::from_millis(5)));
        assert!(t0.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn cancel_wakes_sleeper() {
        let ctx = Context::new();
        let sleeper = ctx.clone();
        let handle = thread::spawn(move || sleeper.sleep(Duration::from_secs(30)));
        thread::sleep(Duration::from_millis(20));
        let t0 = Instant::now();
        ctx.cancel();
        assert!(!handle.join().unwrap());
        assert!(t0.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn sleep_after_cancel_returns_immediately() {
        let ctx = Context::new();
        ctx.cancel();
        assert!(!ctx.sleep(Duration::from_secs(30)));
        assert!(!ctx.sleep(Duration::ZERO));
    }
}
