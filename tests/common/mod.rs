//! Recording doubles for the embedded-hal pin and delay traits.
//!
//! The pin and the delay push onto one shared timeline, so tests can see
//! both the level written and how long the loop held it.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

pub const NANOS_PER_MILLI: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Level of the output register after a write.
    Write { high: bool },
    Wait { ns: u64 },
}

pub type Timeline = Rc<RefCell<Vec<Event>>>;

pub fn timeline() -> Timeline {
    Rc::new(RefCell::new(Vec::new()))
}

/// `(time_ns, high)` for every pin write, with time taken from the waits
/// recorded before it.
pub fn writes_at(timeline: &Timeline) -> Vec<(u64, bool)> {
    let mut now = 0;
    let mut out = Vec::new();
    for event in timeline.borrow().iter() {
        match *event {
            Event::Wait { ns } => now += ns,
            Event::Write { high } => out.push((now, high)),
        }
    }
    out
}

#[derive(Debug)]
pub struct MockPin {
    high: bool,
    timeline: Timeline,
    writes: usize,
    fail_on_write: Option<usize>,
    stuck_from_write: Option<usize>,
}

impl MockPin {
    /// A pin whose output register resets HIGH, so an initial LOW write is
    /// observable.
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            high: true,
            timeline: Rc::clone(timeline),
            writes: 0,
            fail_on_write: None,
            stuck_from_write: None,
        }
    }

    /// Fails the `n`th write (1-based) and every write after it.
    pub fn failing_on_write(mut self, n: usize) -> Self {
        self.fail_on_write = Some(n);
        self
    }

    /// Accepts writes but never changes level.
    pub fn stuck(self) -> Self {
        self.stuck_from_write(1)
    }

    /// Ignores the `n`th write (1-based) and every write after it.
    pub fn stuck_from_write(mut self, n: usize) -> Self {
        self.stuck_from_write = Some(n);
        self
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    fn write(&mut self, high: bool) -> Result<(), ErrorKind> {
        self.writes += 1;
        if self.fail_on_write.is_some_and(|n| self.writes >= n) {
            return Err(ErrorKind::Other);
        }
        if !self.stuck_from_write.is_some_and(|n| self.writes >= n) {
            self.high = high;
        }
        self.timeline
            .borrow_mut()
            .push(Event::Write { high: self.high });
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[derive(Debug)]
pub struct MockDelay {
    timeline: Timeline,
}

impl MockDelay {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: Rc::clone(timeline),
        }
    }

    fn wait(&mut self, ns: u64) {
        self.timeline.borrow_mut().push(Event::Wait { ns });
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(u64::from(ms) * NANOS_PER_MILLI);
    }
}
