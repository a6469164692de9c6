//! Test fixtures shared across engine tests.

use std::cell::Cell;

use chrono::{DateTime, Utc};

use crate::clock::Clock;

/// Clock that hands out strictly increasing one-second ticks from a fixed
/// origin, so history ordering assertions are exact.
pub struct ManualClock {
    next_secs: Cell<i64>,
}

impl ManualClock {
    pub fn starting_at(epoch_secs: i64) -> Self {
        Self {
            next_secs: Cell::new(epoch_secs),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let secs = self.next_secs.get();
        self.next_secs.set(secs + 1);
        DateTime::from_timestamp(secs, 0).expect("fixture timestamp in range")
    }
}
