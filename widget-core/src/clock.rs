use chrono::{Local, Timelike};
use std::fmt::Debug;

/// Source of the local hour used to frame the location as day or night.
pub trait Clock: Send + Sync + Debug {
    /// Hour of the local 24-hour clock, `0..=23`.
    fn current_hour(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0 % 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_is_in_range() {
        assert!(LocalClock.current_hour() < 24);
    }

    #[test]
    fn fixed_clock_wraps() {
        assert_eq!(FixedClock(14).current_hour(), 14);
        assert_eq!(FixedClock(24).current_hour(), 0);
    }
}
