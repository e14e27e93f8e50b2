use chrono::{Datelike, Local, Weekday};
use std::fmt::Debug;

/// Source of "today" for forecast day labels.
pub trait Clock: Send + Sync + Debug {
    fn today(&self) -> Weekday;
}

/// Reads the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Always reports the same weekday.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}
