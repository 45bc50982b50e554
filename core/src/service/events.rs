//! Events published by the timer service
//!
//! One event per observable change, delivered in the order the service
//! applied them. Consumers render these however they like: status lines,
//! banners, speech.

use crate::announce::Announcement;
use crate::history::HistoryEntry;
use crate::session::SessionStatus;

/// Updates pushed from the service to the presentation layer.
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// Selection or lifecycle changed (select, start, pause, reset)
    StatusChanged {
        status: SessionStatus,
        remaining: u32,
        duration: u32,
    },

    /// One second elapsed while running
    Ticked { remaining: u32, duration: u32 },

    /// The announcement policy fired; `text` is already localized
    Announced {
        announcement: Announcement,
        text: String,
    },

    /// A fresh session began; `spoken` is the localized start line
    Started { minutes: u32, spoken: String },

    /// The countdown reached zero
    Finished { title: String, subtitle: String },

    /// A fresh start was recorded
    HistoryRecorded(HistoryEntry),

    /// The history list was emptied
    HistoryCleared,
}
