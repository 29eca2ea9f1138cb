//! Transition controller for a single display slot.
//!
//! A slot is always in exactly one phase:
//!
//! ```text
//!            retarget                 exit done              enter done
//! Idle ───────────────→ Exiting ───────────────→ Entering ───────────────→ Idle
//!                         ↑   │                     │
//!                         │   └── retarget(from) ───┘ (reverse in place)
//!                         └────── retarget(other) ──┘ (fade out from current opacity)
//! ```
//!
//! Only one item is ever presented: the outgoing item finishes fading out
//! before the incoming one starts fading in. A retarget while a transition
//! is in flight cancels it and starts a new one from whatever opacity the
//! visible item has at that instant.

use std::time::{Duration, Instant};

/// Length of each half of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub exit: Duration,
    pub enter: Duration,
}

impl TransitionTiming {
    pub fn new(exit: Duration, enter: Duration) -> Self {
        Self { exit, enter }
    }

    /// No animation: every retarget settles on the next clock step.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(300))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle {
        shown: usize,
    },
    Exiting {
        from: usize,
        to: usize,
        started: Instant,
        duration: Duration,
        start_opacity: f32,
    },
    Entering {
        index: usize,
        started: Instant,
        duration: Duration,
        start_opacity: f32,
    },
}

/// Which phase a presented slot is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Exiting,
    Entering,
}

/// What the renderer should draw at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    pub index: usize,
    /// Visibility in `[0, 1]`.
    pub opacity: f32,
    pub phase: PhaseKind,
}

#[derive(Debug, Clone)]
pub struct TransitionController {
    timing: TransitionTiming,
    phase: Phase,
}

impl TransitionController {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle { shown: 0 },
        }
    }

    /// Start showing `index` from nothing, as on first display.
    pub fn mount(&mut self, index: usize, now: Instant) {
        self.phase = Phase::Entering {
            index,
            started: now,
            duration: self.timing.enter,
            start_opacity: 0.0,
        };
    }

    /// Point the slot at `target`, cancelling any transition in flight.
    pub fn retarget(&mut self, target: usize, now: Instant) {
        self.advance_clock(now);
        let opacity = opacity_of(&self.phase, now);

        self.phase = match self.phase {
            Phase::Idle { shown } if shown == target => self.phase,
            Phase::Idle { shown } => Phase::Exiting {
                from: shown,
                to: target,
                started: now,
                duration: self.timing.exit,
                start_opacity: 1.0,
            },
            Phase::Exiting { to, .. } if to == target => self.phase,
            Phase::Exiting { from, .. } if from == target => Phase::Entering {
                index: from,
                started: now,
                duration: self.timing.enter.mul_f32(1.0 - opacity),
                start_opacity: opacity,
            },
            Phase::Exiting {
                from,
                started,
                duration,
                start_opacity,
                ..
            } => Phase::Exiting {
                from,
                to: target,
                started,
                duration,
                start_opacity,
            },
            Phase::Entering { index, .. } if index == target => self.phase,
            Phase::Entering { index, .. } => Phase::Exiting {
                from: index,
                to: target,
                started: now,
                duration: self.timing.exit.mul_f32(opacity),
                start_opacity: opacity,
            },
        };
    }

    /// Settle any phases that have finished by `now`.
    pub fn advance_clock(&mut self, now: Instant) {
        self.phase = settle(self.phase, now, self.timing);
    }

    /// The single slot to draw at `now`.
    pub fn present(&self, now: Instant) -> Presentation {
        let phase = settle(self.phase, now, self.timing);
        let (index, kind) = match phase {
            Phase::Idle { shown } => (shown, PhaseKind::Idle),
            Phase::Exiting { from, .. } => (from, PhaseKind::Exiting),
            Phase::Entering { index, .. } => (index, PhaseKind::Entering),
        };
        Presentation {
            index,
            opacity: opacity_of(&phase, now),
            phase: kind,
        }
    }

    /// Drop any in-flight animation and show the target immediately.
    pub fn abandon(&mut self) {
        self.phase = Phase::Idle {
            shown: self.target(),
        };
    }

    /// Index the slot is heading towards.
    pub fn target(&self) -> usize {
        match self.phase {
            Phase::Idle { shown } => shown,
            Phase::Exiting { to, .. } => to,
            Phase::Entering { index, .. } => index,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle { .. })
    }

    pub fn timing(&self) -> TransitionTiming {
        self.timing
    }
}

fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

fn opacity_of(phase: &Phase, now: Instant) -> f32 {
    match *phase {
        Phase::Idle { .. } => 1.0,
        Phase::Exiting {
            started,
            duration,
            start_opacity,
            ..
        } => start_opacity * (1.0 - progress(started, duration, now)),
        Phase::Entering {
            started,
            duration,
            start_opacity,
            ..
        } => start_opacity + (1.0 - start_opacity) * progress(started, duration, now),
    }
}

fn settle(mut phase: Phase, now: Instant, timing: TransitionTiming) -> Phase {
    loop {
        phase = match phase {
            Phase::Exiting {
                to,
                started,
                duration,
                ..
            } if progress(started, duration, now) >= 1.0 => Phase::Entering {
                index: to,
                started: started + duration,
                duration: timing.enter,
                start_opacity: 0.0,
            },
            Phase::Entering {
                index,
                started,
                duration,
                ..
            } if progress(started, duration, now) >= 1.0 => Phase::Idle { shown: index },
            settled => return settled,
        };
    }
}
