use std::ops::ControlFlow;
use std::time::Duration;

use pathviz_core::Context;

/// A yield point called by every search after each visitation step.
pub trait Pacer {
    /// Suspend between two steps. `Break` stops the run.
    fn pause(&mut self) -> ControlFlow<()>;
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self) -> ControlFlow<()> {
        (**self).pause()
    }
}

/// Waits a fixed delay per step and stops once its [`Context`] is cancelled.
///
/// The wait is interruptible: cancelling the context wakes a pending pause
/// immediately.
#[derive(Clone, Debug)]
pub struct Timed {
    ctx: Context,
    delay: Duration,
}

impl Timed {
    pub fn new(ctx: Context, delay: Duration) -> Self {
        Self { ctx, delay }
    }
}

impl Pacer for Timed {
    fn pause(&mut self) -> ControlFlow<()> {
        if self.ctx.sleep(self.delay) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

/// Never waits and never stops. Runs a search to completion at full speed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unpaced;

impl Pacer for Unpaced {
    #[inline]
    fn pause(&mut self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
