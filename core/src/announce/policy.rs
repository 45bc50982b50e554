//! Decision rules for spoken countdown announcements
//!
//! The rules are ordered and the first match wins, so a single transition
//! never produces more than one announcement:
//!
//! 1. Zero remaining announces completion.
//! 2. Crossing a five-minute elapsed milestone announces elapsed and
//!    remaining minutes, unless the remainder rounds to zero minutes.
//! 3. From five minutes down to just above one, each whole-minute boundary
//!    announces the minutes left.
//! 4. Sixty seconds announces the one-minute warning; below that every
//!    second announces the bare numeral.

use crate::format::rounded_minutes;
use crate::i18n::Language;

/// Seconds between elapsed milestones (five minutes).
const MILESTONE_STEP: u32 = 300;

/// Remaining seconds below which whole-minute warnings fire.
const WARNING_WINDOW: u32 = 300;

/// One observed countdown step: remaining seconds before and after the
/// tick, plus the selected total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTransition {
    /// Remaining seconds before the tick
    pub previous: u32,
    /// Remaining seconds after the tick
    pub current: u32,
    /// Selected duration in seconds
    pub total: u32,
}

impl TickTransition {
    pub fn new(previous: u32, current: u32, total: u32) -> Self {
        Self {
            previous,
            current,
            total,
        }
    }
}

/// What the countdown says after a tick, before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Announcement {
    /// The countdown reached zero
    Finished,
    /// A five-minute elapsed milestone was crossed
    ElapsedMilestone {
        elapsed_minutes: u32,
        remaining_minutes: u32,
    },
    /// Whole-minute boundary inside the warning window
    MinutesLeft { minutes: u32 },
    /// Exactly one minute remains
    OneMinuteLeft,
    /// Final-minute countdown, spoken as the bare numeral
    SecondsLeft { seconds: u32 },
}

impl Announcement {
    /// Localized text for this announcement. Bare second counts render as
    /// plain digits in every language.
    pub fn render(self, language: Language) -> String {
        match self {
            Self::Finished => language.strings().announce_finished.to_string(),
            Self::ElapsedMilestone {
                elapsed_minutes,
                remaining_minutes,
            } => language.announce_elapsed(elapsed_minutes, remaining_minutes),
            Self::MinutesLeft { minutes } => language.announce_minutes_left(minutes),
            Self::OneMinuteLeft => language.strings().announce_one_minute_left.to_string(),
            Self::SecondsLeft { seconds } => seconds.to_string(),
        }
    }
}

/// Decide what, if anything, to announce for one tick transition.
///
/// Callers are expected to hand in single-second decrements, with
/// `current` one below `previous` and floored at zero. Other inputs do
/// not panic but only the single-step case is meaningful. A zero total
/// never announces.
pub fn decide(transition: TickTransition) -> Option<Announcement> {
    let TickTransition {
        previous,
        current,
        total,
    } = transition;

    if total == 0 {
        return None;
    }
    if current == 0 {
        return Some(Announcement::Finished);
    }

    // Elapsed milestones. The candidate is the first multiple of the step
    // past the previous elapsed value; a single-second tick crosses at
    // most that one.
    let previous_elapsed = total.saturating_sub(previous);
    let current_elapsed = total.saturating_sub(current);
    let crossed = (previous_elapsed / MILESTONE_STEP + 1).checked_mul(MILESTONE_STEP);
    if let Some(milestone) = crossed {
        if milestone <= current_elapsed && milestone <= total {
            let remaining_minutes = rounded_minutes(current);
            if remaining_minutes > 0 {
                return Some(Announcement::ElapsedMilestone {
                    elapsed_minutes: milestone / 60,
                    remaining_minutes,
                });
            }
            // The remainder rounds to zero minutes; the closing rules
            // below cover those final seconds.
        }
    }

    // Whole-minute warnings from five minutes down to two.
    if current > 60 && current <= WARNING_WINDOW && current % 60 == 0 {
        return Some(Announcement::MinutesLeft {
            minutes: current / 60,
        });
    }

    // Final minute. `current` is nonzero here, so the range is 1..=60.
    if current <= 60 {
        return Some(if current == 60 {
            Announcement::OneMinuteLeft
        } else {
            Announcement::SecondsLeft { seconds: current }
        });
    }

    None
}

/// Decide and localize in one call. This is the whole spoken-countdown
/// pipeline for a single tick.
pub fn announcement_text(transition: TickTransition, language: Language) -> Option<String> {
    decide(transition).map(|announcement| announcement.render(language))
}
