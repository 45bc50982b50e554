pub mod announce;
pub mod config;
pub mod format;
pub mod history;
pub mod i18n;
pub mod service;
pub mod session;

// Re-exports for convenience
pub use announce::{Announcement, TickTransition, announcement_text, decide};
pub use config::{AppConfig, ConfigError, DEFAULT_PRESET_MINUTES};
pub use format::{format_clock, rounded_minutes};
pub use history::{HISTORY_CAP, HistoryEntry, HistoryError, SessionHistory, default_history_path};
pub use i18n::{Language, Strings};
pub use service::{
    IntervalTicker, ManualTicker, SharedState, Ticker, TimerCommand, TimerEvent, TimerHandle,
    TimerService, TimerSnapshot,
};
pub use session::{SessionStatus, StartKind, TickOutcome, TimerSession};
