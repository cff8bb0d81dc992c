//! Delivery loop
//!
//! Pumps a transport at a fixed cadence. Each iteration delivers whatever
//! the transport has queued (bounded by its drain limit), then sleeps out
//! the rest of the period. The loop only ends on a fatal consumer error.

use crate::error::Result;
use crate::transport::Transport;
use std::convert::Infallible;
use std::time::{Duration, Instant};

/// Per-iteration pacing
pub trait Pacer {
    /// Block until the next iteration is due
    fn pace(&mut self);
}

/// Fixed-rate pacer
///
/// Best effort: an iteration that overruns its period is not made up for,
/// the next period starts from when the overrun was noticed.
#[derive(Debug)]
pub struct Rate {
    period: Duration,
    last: Instant,
}

impl Rate {
    /// Pace at `hz` iterations per second (`0` is treated as `1`)
    pub fn new(hz: u32) -> Self {
        Self::with_period(Duration::from_secs(1) / hz.max(1))
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current period at `now`, `None` if overrun
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        (self.last + self.period)
            .checked_duration_since(now)
            .filter(|d| !d.is_zero())
    }
}

impl Pacer for Rate {
    fn pace(&mut self) {
        let now = Instant::now();
        match self.remaining(now) {
            Some(wait) => {
                std::thread::sleep(wait);
                self.last += self.period;
            }
            None => self.last = now,
        }
    }
}

/// Transport pump driven by a pacer
pub struct DeliveryLoop<T, P> {
    transport: T,
    pacer: P,
}

impl<T: Transport, P: Pacer> DeliveryLoop<T, P> {
    pub fn new(transport: T, pacer: P) -> Self {
        Self { transport, pacer }
    }

    /// One iteration: dispatch, then pace
    ///
    /// Returns the number of entries delivered.
    pub fn step(&mut self) -> Result<usize> {
        let delivered = self.transport.spin_once()?;
        self.pacer.pace();
        Ok(delivered)
    }

    /// Run until the consumer fails
    pub fn run(mut self) -> Result<Infallible> {
        loop {
            self.step()?;
        }
    }
}
