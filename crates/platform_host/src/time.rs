//! Wall-clock access for timestamping trash operations.

use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Source of unix millisecond timestamps.
pub trait Clock {
    /// Returns "now" in unix milliseconds.
    fn now_unix_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
/// Clock backed by the host's wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_ms(&self) -> u64 {
        unix_time_ms_now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Clock frozen at a fixed instant.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix_ms(&self) -> u64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_unix_ms(&self) -> u64 {
        (**self).now_unix_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.now_unix_ms() > 1_577_836_800_000);
    }

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock(42);
        assert_eq!(clock.now_unix_ms(), 42);
        assert_eq!(Rc::new(clock).now_unix_ms(), 42);
    }
}
