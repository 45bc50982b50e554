//! Event rendering
//!
//! Consumes the timer event stream on a background task. Status changes
//! and announcements print to stdout and spoken lines are forwarded to
//! the speech worker; countdown output interleaves with the prompt the
//! same way a tailed log does.

use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};

use hengio_core::{Announcement, AppConfig, SessionStatus, Strings, TimerEvent, format_clock};

use crate::speech::{SpeechEvent, SpeechSender};

pub async fn run(
    mut events: mpsc::Receiver<TimerEvent>,
    config: Arc<RwLock<AppConfig>>,
    speech: SpeechSender,
) {
    while let Some(event) = events.recv().await {
        let language = config.read().await.language;
        render(event, language.strings(), &speech);
    }
}

fn render(event: TimerEvent, strings: &Strings, speech: &SpeechSender) {
    match event {
        TimerEvent::StatusChanged {
            status, remaining, ..
        } => {
            // Leaving the running state cancels whatever is being spoken.
            if status != SessionStatus::Running {
                let _ = speech.send(SpeechEvent::Stop);
            }
            println!(
                "{} [{}]",
                status_label(status, strings),
                format_clock(remaining)
            );
        }

        TimerEvent::Ticked { remaining, .. } => {
            tracing::trace!(remaining, "tick");
        }

        TimerEvent::Started { spoken, .. } => {
            println!("{spoken}");
            let _ = speech.send(SpeechEvent::Speak { text: spoken });
        }

        TimerEvent::Announced { announcement, text } => {
            // The completion banner right behind this carries the text.
            if announcement != Announcement::Finished {
                println!("  {text}");
            }
            let _ = speech.send(SpeechEvent::Speak { text });
        }

        TimerEvent::Finished { title, subtitle } => {
            println!("{}", "-".repeat(40));
            println!("{title}");
            println!("{subtitle}");
            println!("{}", "-".repeat(40));
        }

        TimerEvent::HistoryRecorded(entry) => {
            tracing::debug!(id = entry.id, seconds = entry.duration_secs, "session recorded");
        }

        TimerEvent::HistoryCleared => {
            println!("{}", strings.history_cleared);
        }
    }
}

pub(crate) fn status_label(status: SessionStatus, strings: &Strings) -> &'static str {
    match status {
        SessionStatus::Idle => strings.status_select,
        SessionStatus::Ready => strings.status_ready,
        SessionStatus::Running => strings.status_running,
        SessionStatus::Paused => strings.status_paused,
        SessionStatus::Finished => strings.finish_title,
    }
}
