//! One-shot latches for effects that must run at most once per page load,
//! even when the framework re-runs initialization re-entrantly.

use std::cell::Cell;

/// Single-threaded one-shot latch. `acquire` returns `true` exactly once.
///
/// This guards against duplicate invocation, not parallelism: the UI thread is
/// the only executor, so checking and setting before the first await point is
/// race-free.
pub struct OnceLatch {
    fired: Cell<bool>,
}

impl OnceLatch {
    pub const fn new() -> Self {
        Self {
            fired: Cell::new(false),
        }
    }

    /// Returns `true` on the first call and `false` on every later call.
    pub fn acquire(&self) -> bool {
        if self.fired.get() {
            false
        } else {
            self.fired.set(true);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OnceLatch;

    #[test]
    fn acquire_succeeds_exactly_once() {
        let latch = OnceLatch::new();
        assert!(latch.acquire());
        assert!(!latch.acquire());
        assert!(!latch.acquire());
    }
}
