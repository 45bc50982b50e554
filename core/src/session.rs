//! Countdown session state
//!
//! A [`TimerSession`] is the single owner of the countdown numbers: the
//! selected duration, the remaining seconds, and whether the clock is
//! running. It has no notion of wall time; whoever owns it decides when a
//! second has passed and calls [`TimerSession::tick`]. That keeps every
//! transition synchronous and lets tests drive a whole session without a
//! runtime.

use crate::announce::{self, Announcement, TickTransition};

/// Lifecycle of a session, derived from the numbers rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No duration selected yet
    #[default]
    Idle,
    /// Duration selected, countdown not started
    Ready,
    /// Counting down
    Running,
    /// Stopped partway with time still on the clock
    Paused,
    /// Reached zero
    Finished,
}

/// How a successful start began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartKind {
    /// Full selection on the clock: announce the start and record history
    Fresh,
    /// Continuing a paused countdown: no announcement, no history entry
    Resume,
}

/// Result of advancing the countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Remaining seconds before the tick
    pub previous: u32,
    /// Remaining seconds after the tick
    pub remaining: u32,
    /// What the policy wants spoken for this transition, if anything
    pub announcement: Option<Announcement>,
    /// The countdown just reached zero
    pub finished: bool,
}

/// Mutable countdown state.
#[derive(Debug, Clone, Default)]
pub struct TimerSession {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected duration in seconds. Zero until a selection is made.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> SessionStatus {
        if self.duration == 0 {
            SessionStatus::Idle
        } else if self.running {
            SessionStatus::Running
        } else if self.remaining == 0 {
            SessionStatus::Finished
        } else if self.remaining == self.duration {
            SessionStatus::Ready
        } else {
            SessionStatus::Paused
        }
    }

    /// Select a new duration. Cancels any countdown in progress and arms a
    /// fresh session of `seconds`.
    pub fn select(&mut self, seconds: u32) {
        self.duration = seconds;
        self.remaining = seconds;
        self.running = false;
    }

    /// Start or resume the countdown.
    ///
    /// Returns what kind of start this was, or `None` when there is
    /// nothing to start: no selection yet, already running, or already
    /// finished. A full clock starts fresh; anything less is a resume.
    pub fn start(&mut self) -> Option<StartKind> {
        if self.duration == 0 || self.remaining == 0 || self.running {
            return None;
        }
        self.running = true;
        Some(if self.remaining == self.duration {
            StartKind::Fresh
        } else {
            StartKind::Resume
        })
    }

    /// Stop the countdown, keeping the remaining time on the clock.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop the countdown and restore the full selected duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration;
    }

    /// Advance one second. Only meaningful while running; the caller is
    /// expected to stop delivering ticks once `finished` comes back true.
    pub fn tick(&mut self) -> TickOutcome {
        let previous = self.remaining;
        self.remaining = self.remaining.saturating_sub(1);

        let announcement = announce::decide(TickTransition::new(
            previous,
            self.remaining,
            self.duration,
        ));

        let finished = self.duration > 0 && self.remaining == 0;
        if finished {
            self.running = false;
        }

        TickOutcome {
            previous,
            remaining: self.remaining,
            announcement,
            finished,
        }
    }
}
