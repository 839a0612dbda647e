use std::time::SystemTime;

/// Source of the current time for the `Date` header.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// [`Clock`] that reads the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// [`Clock`] that always returns the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> SystemTime {
        self.0
    }
}

impl<F: Fn() -> SystemTime> Clock for F {
    #[inline]
    fn now(&self) -> SystemTime {
        self()
    }
}
