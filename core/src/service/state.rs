//! State shared between the service task and its callers

use tokio::sync::RwLock;

use crate::history::HistoryEntry;
use crate::i18n::Language;
use crate::session::SessionStatus;

/// Point-in-time view of the countdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerSnapshot {
    pub status: SessionStatus,
    /// Seconds left on the clock
    pub remaining: u32,
    /// Selected duration in seconds
    pub duration: u32,
    pub language: Language,
}

/// Read-side state published by the service after every mutation. The
/// service task is the only writer.
#[derive(Debug, Default)]
pub struct SharedState {
    pub snapshot: RwLock<TimerSnapshot>,
    pub history: RwLock<Vec<HistoryEntry>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }
}
