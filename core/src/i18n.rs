//! Bilingual string table and language handling
//!
//! Every user-facing string lives in this module so the two languages stay
//! in lockstep: labels are fields on [`Strings`] and spoken templates are
//! exhaustive matches on [`Language`], so adding text for one language
//! without the other fails to compile.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Display and speech language. The set is closed; unknown codes are
/// rejected at the edge by [`Language::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese (default)
    #[default]
    Vi,
    /// English
    En,
}

impl Language {
    /// Canonical two-letter code, as stored in the configuration file.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }

    /// BCP 47 tag handed to the speech engine for voice selection.
    pub const fn speech_tag(self) -> &'static str {
        match self {
            Self::Vi => "vi-VN",
            Self::En => "en-US",
        }
    }

    /// Parse a user-supplied language code. Case-insensitive and tolerant
    /// of region suffixes, so "VI", "vi-VN" and "en_US" all work.
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        match lowered.split(['-', '_']).next() {
            Some("vi") => Some(Self::Vi),
            Some("en") => Some(Self::En),
            _ => None,
        }
    }

    /// Fixed label table for this language.
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::Vi => &VI,
            Self::En => &EN,
        }
    }

    /// Spoken line for a fresh start of `minutes` minutes.
    pub fn announce_start(self, minutes: u32) -> String {
        match self {
            Self::Vi => format!("Bắt đầu tính thời gian cho {minutes} phút"),
            Self::En => format!("Starting {minutes} minute timer"),
        }
    }

    /// Spoken line when a five-minute elapsed milestone is crossed.
    pub fn announce_elapsed(self, elapsed_minutes: u32, remaining_minutes: u32) -> String {
        match self {
            Self::Vi => format!("Đã qua {elapsed_minutes} phút, còn {remaining_minutes} phút"),
            Self::En => format!("{elapsed_minutes} minutes elapsed, {remaining_minutes} left"),
        }
    }

    /// Spoken line for a whole-minute warning in the closing minutes.
    pub fn announce_minutes_left(self, minutes: u32) -> String {
        match self {
            Self::Vi => format!("Còn {minutes} phút"),
            Self::En => format!("{minutes} minutes left"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// String Tables
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed labels for one language. One field per label; both tables below
/// must fill in every field.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,

    // Status line
    pub status_select: &'static str,
    pub status_running: &'static str,
    pub status_paused: &'static str,
    pub status_ready: &'static str,

    // Controls
    pub action_start: &'static str,
    pub action_pause: &'static str,
    pub action_resume: &'static str,
    pub action_reset: &'static str,

    // History panel
    pub history_title: &'static str,
    pub history_empty: &'static str,
    pub history_clear: &'static str,
    pub history_cleared: &'static str,
    pub history_not_found: &'static str,

    // Completion banner
    pub finish_title: &'static str,
    pub finish_subtitle: &'static str,

    // Duration picker
    pub unit_minutes: &'static str,
    pub custom_duration: &'static str,

    // Speech
    pub voice_label: &'static str,
    pub voice_on: &'static str,
    pub voice_off: &'static str,
    pub voice_missing: &'static str,

    // Spoken announcements without parameters
    pub announce_finished: &'static str,
    pub announce_one_minute_left: &'static str,
}

const VI: Strings = Strings {
    title: "Đồng Hồ Đếm Ngược",

    status_select: "Chọn thời gian",
    status_running: "Đang chạy",
    status_paused: "Tạm dừng",
    status_ready: "Sẵn sàng",

    action_start: "Bắt đầu",
    action_pause: "Tạm dừng",
    action_resume: "Tiếp tục",
    action_reset: "Đặt lại",

    history_title: "Lịch sử",
    history_empty: "Chưa có lịch sử",
    history_clear: "Xóa tất cả",
    history_cleared: "Đã xóa lịch sử",
    history_not_found: "Không tìm thấy mục lịch sử",

    finish_title: "Hết giờ!",
    finish_subtitle: "Phiên làm việc đã kết thúc",

    unit_minutes: "phút",
    custom_duration: "Khác",

    voice_label: "Giọng nói",
    voice_on: "bật",
    voice_off: "tắt",
    voice_missing: "Không tìm thấy giọng tiếng Việt trên thiết bị này",

    announce_finished: "Hết giờ!",
    announce_one_minute_left: "Còn 1 phút",
};

const EN: Strings = Strings {
    title: "Countdown Timer",

    status_select: "Select time",
    status_running: "Running",
    status_paused: "Paused",
    status_ready: "Ready",

    action_start: "Start",
    action_pause: "Pause",
    action_resume: "Resume",
    action_reset: "Reset",

    history_title: "History",
    history_empty: "No history yet",
    history_clear: "Clear all",
    history_cleared: "History cleared",
    history_not_found: "History entry not found",

    finish_title: "Time's up!",
    finish_subtitle: "Session has ended",

    unit_minutes: "min",
    custom_duration: "Other",

    voice_label: "Voice",
    voice_on: "on",
    voice_off: "off",
    voice_missing: "No English voice found on this device",

    announce_finished: "Time's up!",
    announce_one_minute_left: "1 minute left",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_codes_and_region_tags() {
        assert_eq!(Language::parse("vi"), Some(Language::Vi));
        assert_eq!(Language::parse("VI"), Some(Language::Vi));
        assert_eq!(Language::parse("vi-VN"), Some(Language::Vi));
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("en_US"), Some(Language::En));
        assert_eq!(Language::parse(" en "), Some(Language::En));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("vietnamese"), None);
    }

    #[test]
    fn default_language_is_vietnamese() {
        assert_eq!(Language::default(), Language::Vi);
        assert_eq!(Language::default().speech_tag(), "vi-VN");
    }

    #[test]
    fn spoken_templates_fill_in_numbers() {
        assert_eq!(
            Language::Vi.announce_start(25),
            "Bắt đầu tính thời gian cho 25 phút"
        );
        assert_eq!(Language::En.announce_start(25), "Starting 25 minute timer");
        assert_eq!(
            Language::Vi.announce_elapsed(5, 55),
            "Đã qua 5 phút, còn 55 phút"
        );
        assert_eq!(
            Language::En.announce_elapsed(5, 55),
            "5 minutes elapsed, 55 left"
        );
        assert_eq!(Language::Vi.announce_minutes_left(3), "Còn 3 phút");
        assert_eq!(Language::En.announce_minutes_left(3), "3 minutes left");
    }

    #[test]
    fn tables_differ_between_languages() {
        let vi = Language::Vi.strings();
        let en = Language::En.strings();
        assert_ne!(vi.title, en.title);
        assert_ne!(vi.status_running, en.status_running);
        assert_ne!(vi.history_empty, en.history_empty);
        assert_ne!(vi.announce_one_minute_left, en.announce_one_minute_left);
    }

    #[test]
    fn language_serializes_as_lowercase_code() {
        let vi = serde_json::to_string(&Language::Vi).unwrap();
        assert_eq!(vi, "\"vi\"");
        let back: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Language::En);
    }
}
