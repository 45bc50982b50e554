use std::io::Write;

use hengio_core::{Language, TimerCommand, format_clock};

use crate::context::CliContext;
use crate::printer;
use crate::speech::SpeechEvent;

/// Banner printed on startup: title, current status, and the presets.
pub async fn welcome(ctx: &CliContext) {
    let strings = {
        let config = ctx.config.read().await;
        config.language.strings()
    };
    println!("{}", strings.title);
    println!("{}", "-".repeat(40));
    println!("{}", strings.status_select);
    presets(ctx).await;
    println!(
        "  {}: start | {}: pause | {}: resume | {}: reset",
        strings.action_start, strings.action_pause, strings.action_resume, strings.action_reset
    );
}

pub async fn presets(ctx: &CliContext) {
    let config = ctx.config.read().await;
    let strings = config.language.strings();
    for minutes in &config.preset_minutes {
        println!(
            "  {:>3} {}  [{}]",
            minutes,
            strings.unit_minutes,
            format_clock(minutes.saturating_mul(60))
        );
    }
    println!("  {}: select --minutes <n>", strings.custom_duration);
}

pub async fn select(ctx: &CliContext, minutes: Option<u32>, seconds: Option<u32>) {
    let total = match (minutes, seconds) {
        (Some(minutes), None) => minutes.saturating_mul(60),
        (None, Some(seconds)) => seconds,
        _ => {
            println!("select takes exactly one of --minutes or --seconds");
            return;
        }
    };
    if total == 0 {
        println!("duration must be at least one second");
        return;
    }
    ctx.timer.send(TimerCommand::Select { seconds: total }).await;
}

pub async fn start(ctx: &CliContext) {
    ctx.timer.send(TimerCommand::Start).await;
}

pub async fn pause(ctx: &CliContext) {
    ctx.timer.send(TimerCommand::Pause).await;
}

pub async fn reset(ctx: &CliContext) {
    ctx.timer.send(TimerCommand::Reset).await;
}

pub async fn status(ctx: &CliContext) {
    let snapshot = ctx.timer.snapshot().await;
    let strings = ctx.config.read().await.language.strings();
    println!(
        "{} [{}]",
        printer::status_label(snapshot.status, strings),
        format_clock(snapshot.remaining)
    );
}

pub async fn history(ctx: &CliContext) {
    let entries = ctx.timer.history().await;
    let strings = ctx.config.read().await.language.strings();

    if entries.is_empty() {
        println!("{}", strings.history_empty);
        return;
    }

    println!("{}", strings.history_title);
    println!("{}", "-".repeat(44));
    for entry in &entries {
        println!(
            "  [{:>3}] {:>3} {}  [{}]  {}",
            entry.id,
            entry.duration_minutes(),
            strings.unit_minutes,
            entry.duration_display(),
            entry.started_at_display()
        );
    }
    println!("  {}: clear-history", strings.history_clear);
}

/// Re-select the duration of a past session by its history id.
pub async fn again(ctx: &CliContext, id: u64) {
    let entries = ctx.timer.history().await;
    let Some(entry) = entries.iter().find(|entry| entry.id == id) else {
        let strings = ctx.config.read().await.language.strings();
        println!("{}", strings.history_not_found);
        return;
    };
    ctx.timer
        .send(TimerCommand::Select {
            seconds: entry.duration_secs,
        })
        .await;
}

pub async fn clear_history(ctx: &CliContext) {
    ctx.timer.send(TimerCommand::ClearHistory).await;
}

pub async fn set_language(ctx: &CliContext, code: &str) {
    let Some(language) = Language::parse(code) else {
        println!("unknown language '{code}' (expected vi or en)");
        return;
    };

    {
        let mut config = ctx.config.write().await;
        config.language = language;
        if let Err(error) = config.save() {
            tracing::warn!(%error, "failed to save configuration");
        }
    }

    ctx.timer.send(TimerCommand::SetLanguage(language)).await;
    println!("{}", language.strings().title);
}

/// Flip the spoken-announcement switch, silencing anything mid-utterance
/// when turning it off.
pub async fn toggle_voice(ctx: &CliContext) {
    let (enabled, strings) = {
        let mut config = ctx.config.write().await;
        config.speech_enabled = !config.speech_enabled;
        if let Err(error) = config.save() {
            tracing::warn!(%error, "failed to save configuration");
        }
        (config.speech_enabled, config.language.strings())
    };

    if !enabled {
        let _ = ctx.speech.send(SpeechEvent::Stop);
    }
    println!(
        "{}: {}",
        strings.voice_label,
        if enabled {
            strings.voice_on
        } else {
            strings.voice_off
        }
    );
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("language: {}", config.language.code());
    println!(
        "speech: {}",
        if config.speech_enabled { "on" } else { "off" }
    );
    println!("speech rate: {}", config.speech_rate);
    let minutes: Vec<String> = config
        .preset_minutes
        .iter()
        .map(|minutes| minutes.to_string())
        .collect();
    println!("presets: {} min", minutes.join(", "));
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
