//! Wall-clock timing around a single call.
//!
//! The engines never time themselves; callers wrap each invocation with
//! [`timed`] at the call site.

use std::time::Instant;

use crate::models::Elapsed;

/// Value produced by a timed call together with its elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<R> {
    pub value: R,
    pub elapsed: Elapsed,
}

/// Run `f` once, measuring elapsed time with a monotonic clock.
pub fn timed<R>(f: impl FnOnce() -> R) -> Timed<R> {
    let start = Instant::now();
    let value = f();
    let elapsed = Elapsed::from(start.elapsed());
    Timed { value, elapsed }
}
