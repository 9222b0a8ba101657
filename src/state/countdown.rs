//! Countdown to an event's expiry

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Time left until expiry, split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub expired: bool,
    pub days: i64,
    pub hours: i64,
    pub mins: i64,
    pub secs: i64,
}

impl Countdown {
    /// Compute the countdown from `now` to `expiry`
    pub fn between(now: DateTime<Utc>, expiry: DateTime<Utc>) -> Self {
        let diff = expiry - now;
        if diff <= chrono::Duration::zero() {
            return Self {
                expired: true,
                ..Self::default()
            };
        }

        let total_secs = diff.num_seconds();
        Self {
            expired: false,
            days: total_secs / 86_400,
            hours: (total_secs / 3_600) % 24,
            mins: (total_secs / 60) % 60,
            secs: total_secs % 60,
        }
    }

    /// Labelled units in display order
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Mins", self.mins),
            ("Secs", self.secs),
        ]
    }
}

/// Periodic countdown recomputation owned by the event view.
///
/// Dropping the timer (leaving the view) stops the recomputation.
#[derive(Debug)]
pub struct CountdownTimer {
    expiry: DateTime<Utc>,
    current: Countdown,
    last_tick: Instant,
}

impl CountdownTimer {
    const INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(expiry: DateTime<Utc>) -> Self {
        Self {
            expiry,
            current: Countdown::between(Utc::now(), expiry),
            last_tick: Instant::now(),
        }
    }

    pub fn current(&self) -> Countdown {
        self.current
    }

    /// Recompute once the interval has elapsed.
    /// Returns true when the displayed value changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.current.expired || self.last_tick.elapsed() < Self::INTERVAL {
            return false;
        }
        self.last_tick = Instant::now();
        let next = Countdown::between(now, self.expiry);
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_expired_when_expiry_in_past() {
        let countdown = Countdown::between(at(10), at(0));
        assert!(countdown.expired);
        assert_eq!(countdown.days + countdown.hours + countdown.mins + countdown.secs, 0);
    }

    #[test]
    fn test_expired_at_exact_expiry() {
        assert!(Countdown::between(at(0), at(0)).expired);
    }

    #[test]
    fn test_splits_units() {
        let remaining = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
        let countdown = Countdown::between(at(0), at(remaining));
        assert_eq!(
            countdown,
            Countdown {
                expired: false,
                days: 2,
                hours: 3,
                mins: 4,
                secs: 5,
            }
        );
    }

    #[test]
    fn test_sub_second_remaining_is_not_expired() {
        let now = at(0);
        let expiry = now + chrono::Duration::milliseconds(500);
        let countdown = Countdown::between(now, expiry);
        assert!(!countdown.expired);
        assert_eq!(countdown.secs, 0);
    }

    #[test]
    fn test_units_order() {
        let labels: Vec<_> = Countdown::default().units().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Days", "Hours", "Mins", "Secs"]);
    }

    #[test]
    fn test_timer_does_not_tick_before_interval() {
        let mut timer = CountdownTimer::new(Utc::now() + chrono::Duration::hours(1));
        assert!(!timer.tick(Utc::now() + chrono::Duration::minutes(5)));
    }

    #[test]
    fn test_timer_stops_once_expired() {
        let mut timer = CountdownTimer::new(Utc::now() - chrono::Duration::seconds(1));
        assert!(timer.current().expired);
        assert!(!timer.tick(Utc::now()));
    }
}
