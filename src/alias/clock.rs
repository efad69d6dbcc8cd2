//! Wall-clock seam for the domain strategy.

use chrono::{Local, NaiveDateTime};

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight on the given date.
    ///
    /// Returns `None` for dates that do not exist.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::on(2026, 2, 8).unwrap();

        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().day(), 8);
        assert_eq!(clock.now().month(), 2);
    }

    #[test]
    fn test_fixed_clock_rejects_invalid_dates() {
        assert!(FixedClock::on(2026, 2, 30).is_none());
    }
}
