// Where the clock gets "now" from.

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::clock::ClockReading;

// Anything that can tell the current wall-clock time with millisecond resolution.
pub trait TimeSource {
    fn now(&self) -> ClockReading;
}

// The local system clock, read through chrono.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockReading {
        reading_from(&Local::now())
    }
}

// Break a chrono timestamp into the parts the clock face needs.
pub fn reading_from<Tz: TimeZone>(instant: &DateTime<Tz>) -> ClockReading {
    // During a leap second chrono reports nanoseconds >= 1_000_000_000.
    let millis = (instant.nanosecond() / 1_000_000).min(999);
    ClockReading::new(instant.hour(), instant.minute(), instant.second(), millis)
}
