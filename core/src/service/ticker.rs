//! Tick scheduling
//!
//! The service never reads the clock. A [`Ticker`] starts a cancellable
//! task that feeds `Tick` commands into the service's own command channel,
//! so every mutation happens on one task and tests can replace wall time
//! with hand-delivered ticks.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::TimerCommand;

/// Starts the periodic tick feed. The returned handle is aborted to stop
/// the feed; after the abort no further ticks arrive.
pub trait Ticker: Send + Sync {
    fn start(&self, tx: mpsc::Sender<TimerCommand>) -> JoinHandle<()>;
}

/// Production ticker: one `Tick` per wall-clock second.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn start(&self, tx: mpsc::Sender<TimerCommand>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval completes immediately;
            // swallow it so the countdown moves a full second later.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(TimerCommand::Tick).await.is_err() {
                    break;
                }
            }
        })
    }
}

/// Test ticker that never fires on its own. Tests push `Tick` commands
/// through the handle instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualTicker;

impl Ticker for ManualTicker {
    fn start(&self, _tx: mpsc::Sender<TimerCommand>) -> JoinHandle<()> {
        tokio::spawn(async {})
    }
}
