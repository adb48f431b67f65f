// Instrumentation bracketing the measured kernel invocation.

use std::time::Instant;

/// A measurement window around one kernel invocation.
///
/// The harness calls `start` immediately before the kernel and `stop`
/// immediately after, and consumes no return value from either. Swap
/// in [`NoopStats`] to run without instrumentation, or a different
/// implementation to hook up a real profiler, without touching the
/// kernel or the harness.
pub trait Stats {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Instrumentation that does nothing.
pub struct NoopStats;

impl Stats for NoopStats {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}

/// Wall-clock measurement window, reported through the logger on `stop`.
#[derive(Default)]
pub struct TimerStats {
    started: Option<Instant>,
    pub elapsed: Option<std::time::Duration>,
}

impl TimerStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stats for TimerStats {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) {
        match self.started.take() {
            Some(started) => {
                let elapsed = started.elapsed();
                log::info!("Time to compute prefix sum: {:?}", elapsed);
                self.elapsed = Some(elapsed);
            }
            None => log::warn!("Measurement window stopped without being started."),
        }
    }
}
