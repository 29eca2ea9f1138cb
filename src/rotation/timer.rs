//! Deadline-based rotation timer.
//!
//! The timer does not own a callback. Its owner polls it from the host
//! event loop and, when a tick is due, acts on its own live state. There
//! is no captured closure that could hold a stale view of the collection.

use std::time::{Duration, Instant};

use super::interval::RotationInterval;

#[derive(Debug, Default)]
pub struct RotationTimer {
    interval: Option<RotationInterval>,
    next_due: Option<Instant>,
}

impl RotationTimer {
    /// A stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer; the first tick is due one interval after `now`.
    ///
    /// Starting an already running timer replaces the running window
    /// instead of creating a second one.
    pub fn start(&mut self, interval: RotationInterval, now: Instant) {
        if self.is_running() {
            tracing::debug!("Rotation timer already running, restarting window");
            self.stop();
        }
        self.interval = Some(interval);
        self.next_due = Some(now + interval.as_duration());
    }

    /// Cancel the timer. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Re-arm with the current interval so the next tick is a full
    /// interval after `now`. Returns false when the timer is stopped.
    pub fn restart(&mut self, now: Instant) -> bool {
        match (self.is_running(), self.interval) {
            (true, Some(interval)) => {
                self.next_due = Some(now + interval.as_duration());
                true
            }
            _ => false,
        }
    }

    /// Returns true when a tick is due at `now`.
    ///
    /// If the host stalled across several intervals the missed ticks are
    /// coalesced into one; the next deadline stays on the original grid.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(due), Some(interval)) = (self.next_due, self.interval) else {
            return false;
        };
        if now < due {
            return false;
        }

        let period = interval.as_duration();
        let late = now.duration_since(due);
        let phase_nanos = late.as_nanos() % period.as_nanos();
        let phase = Duration::from_nanos(u64::try_from(phase_nanos).unwrap_or(0));
        self.next_due = Some(now + (period - phase));
        true
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn interval(&self) -> Option<RotationInterval> {
        self.interval
    }
}
