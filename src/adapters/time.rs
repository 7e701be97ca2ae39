//! Clock adapters.
//!
//! - [`SystemClock`]: today's date in the host's local time zone.
//! - [`FixedClock`]: a pinned date for replays and tests.

use chrono::{Local, NaiveDate};

use crate::app::ports::ClockPort;

/// Reads the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }

    /// Move the pinned day.
    pub fn set(&mut self, today: NaiveDate) {
        self.0 = today;
    }
}

impl ClockPort for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_pinned() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut clock = FixedClock::new(day);
        assert_eq!(clock.today(), day);
        let next = day.succ_opt().unwrap();
        clock.set(next);
        assert_eq!(clock.today(), next);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock::new().today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
