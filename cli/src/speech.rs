//! Spoken announcements
//!
//! A worker thread owns the platform speech engine and receives
//! [`SpeechEvent`]s over a channel, so the engine's handles never leave
//! that thread. Each new utterance pre-empts the one still playing; a
//! late countdown number must never queue up behind an earlier one.
//!
//! TTS runs through the platform engine on Windows/macOS. Linux shells
//! out to espeak.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use tokio::sync::RwLock;

use hengio_core::{AppConfig, Language};

/// Requests handled by the speech worker.
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    /// Speak a line, cancelling whatever is still playing
    Speak { text: String },
    /// Cancel the current utterance
    Stop,
}

/// Sender half used by the event printer and commands.
pub type SpeechSender = Sender<SpeechEvent>;

/// Start the speech worker and hand back its sender. The worker exits
/// when every sender is dropped.
pub fn spawn_speech(settings: Arc<RwLock<AppConfig>>) -> SpeechSender {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || SpeechService::new(rx, settings).run());
    tx
}

struct SpeechService {
    event_rx: Receiver<SpeechEvent>,

    /// Shared settings, read per utterance so toggles apply immediately
    settings: Arc<RwLock<AppConfig>>,

    /// Platform TTS engine (None if initialization failed)
    #[cfg(not(target_os = "linux"))]
    tts: Option<tts::Tts>,

    /// Language the current voice was picked for
    #[cfg(not(target_os = "linux"))]
    voice_for: Option<Language>,

    /// Child from the previous utterance, reaped on the next one
    #[cfg(target_os = "linux")]
    espeak: Option<std::process::Child>,

    /// A missing voice is reported once, then the default voice carries on
    voice_warned: bool,
}

impl SpeechService {
    fn new(event_rx: Receiver<SpeechEvent>, settings: Arc<RwLock<AppConfig>>) -> Self {
        #[cfg(not(target_os = "linux"))]
        let tts = match tts::Tts::default() {
            Ok(mut engine) => {
                let _ = engine.set_rate(engine.normal_rate());
                Some(engine)
            }
            Err(error) => {
                tracing::warn!(%error, "speech engine unavailable, announcements stay visual only");
                None
            }
        };

        Self {
            event_rx,
            settings,
            #[cfg(not(target_os = "linux"))]
            tts,
            #[cfg(not(target_os = "linux"))]
            voice_for: None,
            #[cfg(target_os = "linux")]
            espeak: None,
            voice_warned: false,
        }
    }

    fn run(mut self) {
        while let Ok(event) = self.event_rx.recv() {
            // This thread is not a runtime worker, so a blocking read on
            // the shared settings is fine here.
            let (enabled, language, rate) = {
                let settings = self.settings.blocking_read();
                (
                    settings.speech_enabled,
                    settings.language,
                    settings.speech_rate,
                )
            };

            match event {
                SpeechEvent::Speak { text } => {
                    if !enabled {
                        continue;
                    }
                    self.speak(&text, language, rate);
                }
                SpeechEvent::Stop => self.stop(),
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn speak(&mut self, text: &str, language: Language, rate: f32) {
        if self.voice_for != Some(language) {
            self.apply_voice(language);
            self.voice_for = Some(language);
        }
        if let Some(ref mut tts) = self.tts {
            let _ = tts.set_rate(tts.normal_rate() * rate);
            let _ = tts.speak(text, true);
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn stop(&mut self) {
        if let Some(ref mut tts) = self.tts {
            let _ = tts.stop();
        }
    }

    /// Pick an installed voice matching the language, falling back to the
    /// engine default with a one-time warning.
    #[cfg(not(target_os = "linux"))]
    fn apply_voice(&mut self, language: Language) {
        let Some(ref mut tts) = self.tts else {
            return;
        };
        let wanted = language.code();
        let voice = tts.voices().ok().and_then(|voices| {
            voices.into_iter().find(|voice| {
                voice
                    .language()
                    .to_string()
                    .to_ascii_lowercase()
                    .starts_with(wanted)
            })
        });
        match voice {
            Some(voice) => {
                let _ = tts.set_voice(&voice);
            }
            None => {
                if !self.voice_warned {
                    self.voice_warned = true;
                    tracing::warn!(tag = language.speech_tag(), "no matching voice installed");
                    println!("{}", language.strings().voice_missing);
                }
            }
        }
    }

    #[cfg(target_os = "linux")]
    fn speak(&mut self, text: &str, language: Language, rate: f32) {
        use std::process::Command;

        self.stop();

        // espeak's -s flag is words per minute; 175 is its default pace.
        let wpm = ((175.0 * rate).round() as u32).max(80);
        let result = Command::new("espeak")
            .arg("-v")
            .arg(espeak_voice(language))
            .arg("-s")
            .arg(wpm.to_string())
            .arg(text)
            .spawn();

        match result {
            Ok(child) => self.espeak = Some(child),
            Err(error) => {
                if !self.voice_warned {
                    self.voice_warned = true;
                    tracing::warn!(%error, "espeak not available, announcements stay visual only");
                    println!("{}", language.strings().voice_missing);
                }
            }
        }
    }

    #[cfg(target_os = "linux")]
    fn stop(&mut self) {
        if let Some(mut child) = self.espeak.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// espeak voice names differ from BCP 47 tags.
#[cfg(target_os = "linux")]
fn espeak_voice(language: Language) -> &'static str {
    match language {
        Language::Vi => "vi",
        Language::En => "en-us",
    }
}
