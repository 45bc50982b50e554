//! Timer service
//!
//! Single owner of the mutable countdown state. Commands arrive on an
//! mpsc channel, get applied to the [`TimerSession`] on one background
//! task, and every observable change leaves as a [`TimerEvent`] in apply
//! order. While the session runs, an injected [`Ticker`] feeds `Tick`
//! commands into the same channel, so ticks and user commands are
//! serialized and nothing races.
//!
//! ```text
//! TimerHandle ──commands──▶ service task ──events──▶ presentation
//!                    ▲                │
//!                    └──── Ticker ────┘  (one Tick per second)
//! ```

mod events;
mod state;
mod ticker;


pub use events::TimerEvent;
pub use state::{SharedState, TimerSnapshot};
pub use ticker::{IntervalTicker, ManualTicker, Ticker};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::format::rounded_minutes;
use crate::history::{HistoryEntry, SessionHistory};
use crate::i18n::Language;
use crate::session::{StartKind, TimerSession};

/// Capacity of the command and event channels.
const CHANNEL_CAPACITY: usize = 64;

/// Messages accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Select a new total duration in seconds
    Select { seconds: u32 },
    /// Start a fresh countdown or resume a paused one
    Start,
    Pause,
    Reset,
    /// One second elapsed; sent by the ticker
    Tick,
    SetLanguage(Language),
    ClearHistory,
    Shutdown,
}

/// Cloneable endpoint used by the presentation layer to drive the service
/// and read its state.
#[derive(Clone)]
pub struct TimerHandle {
    tx: mpsc::Sender<TimerCommand>,
    shared: Arc<SharedState>,
}

impl TimerHandle {
    pub async fn send(&self, command: TimerCommand) {
        let _ = self.tx.send(command).await;
    }

    pub async fn snapshot(&self) -> TimerSnapshot {
        *self.shared.snapshot.read().await
    }

    /// History entries, newest first.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.shared.history.read().await.clone()
    }
}

/// The service task. Construct with [`TimerService::spawn`].
pub struct TimerService {
    session: TimerSession,
    language: Language,
    history: SessionHistory,
    history_path: PathBuf,
    shared: Arc<SharedState>,
    ticker: Arc<dyn Ticker>,
    ticker_handle: Option<JoinHandle<()>>,
    cmd_tx: mpsc::Sender<TimerCommand>,
    cmd_rx: mpsc::Receiver<TimerCommand>,
    event_tx: mpsc::Sender<TimerEvent>,
}

impl TimerService {
    /// Start the service on a background task.
    ///
    /// Returns the driving handle, the event stream, and the task handle
    /// for shutdown joins. History is loaded from `history_path` up front.
    pub fn spawn(
        language: Language,
        history_path: PathBuf,
        ticker: Arc<dyn Ticker>,
    ) -> (TimerHandle, mpsc::Receiver<TimerEvent>, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let shared = Arc::new(SharedState::new());

        let service = Self {
            session: TimerSession::new(),
            language,
            history: SessionHistory::load(&history_path),
            history_path,
            shared: shared.clone(),
            ticker,
            ticker_handle: None,
            cmd_tx: cmd_tx.clone(),
            cmd_rx,
            event_tx,
        };

        let task = tokio::spawn(service.run());
        let handle = TimerHandle { tx: cmd_tx, shared };
        (handle, event_rx, task)
    }

    async fn run(mut self) {
        tracing::info!("timer service started");
        self.publish_snapshot().await;
        self.publish_history().await;

        while let Some(command) = self.cmd_rx.recv().await {
            if matches!(command, TimerCommand::Shutdown) {
                break;
            }
            self.apply(command).await;
        }

        self.stop_ticker();
        tracing::info!("timer service stopped");
    }

    async fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Select { seconds } => self.select(seconds).await,
            TimerCommand::Start => self.start().await,
            TimerCommand::Pause => self.pause().await,
            TimerCommand::Reset => self.reset().await,
            TimerCommand::Tick => self.tick().await,
            TimerCommand::SetLanguage(language) => self.set_language(language).await,
            TimerCommand::ClearHistory => self.clear_history().await,
            TimerCommand::Shutdown => {}
        }
    }

    async fn select(&mut self, seconds: u32) {
        self.stop_ticker();
        self.session.select(seconds);
        tracing::debug!(seconds, "duration selected");
        self.publish_snapshot().await;
        self.emit_status().await;
    }

    async fn start(&mut self) {
        let Some(kind) = self.session.start() else {
            return;
        };

        if kind == StartKind::Fresh {
            let minutes = rounded_minutes(self.session.duration());
            let spoken = self.language.announce_start(minutes);
            let entry = self
                .history
                .record(self.session.duration(), Utc::now().timestamp_millis());
            if let Err(error) = self.history.save(&self.history_path) {
                tracing::warn!(%error, "failed to save history");
            }
            self.publish_history().await;
            self.emit(TimerEvent::Started { minutes, spoken }).await;
            self.emit(TimerEvent::HistoryRecorded(entry)).await;
        }

        self.ticker_handle = Some(self.ticker.start(self.cmd_tx.clone()));
        tracing::debug!(kind = ?kind, remaining = self.session.remaining(), "countdown started");
        self.publish_snapshot().await;
        self.emit_status().await;
    }

    async fn pause(&mut self) {
        if !self.session.is_running() {
            return;
        }
        self.stop_ticker();
        self.session.pause();
        tracing::debug!(remaining = self.session.remaining(), "countdown paused");
        self.publish_snapshot().await;
        self.emit_status().await;
    }

    async fn reset(&mut self) {
        self.stop_ticker();
        self.session.reset();
        tracing::debug!("countdown reset");
        self.publish_snapshot().await;
        self.emit_status().await;
    }

    async fn tick(&mut self) {
        // A tick can already be queued when a pause or finish lands; the
        // session is no longer running, so drop it.
        if !self.session.is_running() {
            return;
        }

        let outcome = self.session.tick();
        self.publish_snapshot().await;
        self.emit(TimerEvent::Ticked {
            remaining: outcome.remaining,
            duration: self.session.duration(),
        })
        .await;

        if let Some(announcement) = outcome.announcement {
            let text = announcement.render(self.language);
            self.emit(TimerEvent::Announced { announcement, text }).await;
        }

        if outcome.finished {
            self.stop_ticker();
            let strings = self.language.strings();
            self.emit(TimerEvent::Finished {
                title: strings.finish_title.to_string(),
                subtitle: strings.finish_subtitle.to_string(),
            })
            .await;
        }
    }

    async fn set_language(&mut self, language: Language) {
        self.language = language;
        tracing::debug!(code = language.code(), "language changed");
        self.publish_snapshot().await;
    }

    async fn clear_history(&mut self) {
        self.history.clear();
        if let Err(error) = self.history.save(&self.history_path) {
            tracing::warn!(%error, "failed to save history");
        }
        self.publish_history().await;
        self.emit(TimerEvent::HistoryCleared).await;
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker_handle.take() {
            handle.abort();
        }
    }

    async fn publish_snapshot(&self) {
        let mut snapshot = self.shared.snapshot.write().await;
        snapshot.status = self.session.status();
        snapshot.remaining = self.session.remaining();
        snapshot.duration = self.session.duration();
        snapshot.language = self.language;
    }

    async fn publish_history(&self) {
        *self.shared.history.write().await = self.history.entries().to_vec();
    }

    async fn emit(&self, event: TimerEvent) {
        let _ = self.event_tx.send(event).await;
    }

    async fn emit_status(&self) {
        self.emit(TimerEvent::StatusChanged {
            status: self.session.status(),
            remaining: self.session.remaining(),
            duration: self.session.duration(),
        })
        .await;
    }
}
