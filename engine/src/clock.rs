//! Wall-clock access behind a trait so engine operations stay deterministic
//! under test.

use chrono::{DateTime, Utc};

/// Source of spin timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
