use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use hengio_core::{
    AppConfig, IntervalTicker, TimerCommand, TimerHandle, TimerService, default_history_path,
};

use crate::printer;
use crate::speech::{self, SpeechSender};

/// Background task handles owned by the CLI.
#[derive(Default)]
pub struct BackgroundTasks {
    pub service: Option<JoinHandle<()>>,
    pub printer: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.service.take() {
            handle.abort();
        }
        if let Some(handle) = self.printer.take() {
            handle.abort();
        }
    }
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    /// Endpoint for driving the timer service and reading its state
    pub timer: TimerHandle,
    pub speech: SpeechSender,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    /// Load configuration and start the timer service, the event printer,
    /// and the speech worker.
    pub fn new() -> Self {
        let config = AppConfig::load();
        let language = config.language;
        let config = Arc::new(RwLock::new(config));

        let (timer, events, service) =
            TimerService::spawn(language, default_history_path(), Arc::new(IntervalTicker));

        let speech_tx = speech::spawn_speech(config.clone());
        let printer = tokio::spawn(printer::run(events, config.clone(), speech_tx.clone()));

        let tasks = BackgroundTasks {
            service: Some(service),
            printer: Some(printer),
        };

        Self {
            config,
            timer,
            speech: speech_tx,
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }

    /// Stop the timer service cleanly, then tear down the workers.
    pub async fn shutdown(&self) {
        self.timer.send(TimerCommand::Shutdown).await;
        let mut tasks = self.tasks.lock().await;
        if let Some(service) = tasks.service.take() {
            let _ = service.await;
        }
        tasks.abort_all();
    }
}
