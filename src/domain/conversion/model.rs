use chrono::{DateTime, Utc};

use super::error::ConversionError;

/// Maximum accepted input length, matching the cap advertised by the input
/// control.
pub const MAX_TEXT_CHARS: usize = 1000;

/// History entries keep at most this many characters of the original text.
pub const DISPLAY_TEXT_CHARS: usize = 50;

/// Number of recent conversions retained, most recent first.
pub const MAX_HISTORY_ENTRIES: usize = 3;

const ELLIPSIS: &str = "...";
const WELCOME_TEXT: &str = "Welcome to Speakify! Try your first text-to-speech conversion.";

/// Validated text for one synthesis request. Construction rejects
/// empty/whitespace-only and over-long input before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    text: String,
}

impl ConversionRequest {
    pub fn new(text: &str) -> Result<Self, ConversionError> {
        if text.trim().is_empty() {
            return Err(ConversionError::EmptyText);
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(ConversionError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// The text exactly as submitted; trimming is only applied for the
    /// emptiness check.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A playable reference to a generated audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableAudio {
    pub file_url: String,
    pub play_url: String,
    pub generated_at: DateTime<Utc>,
}

impl PlayableAudio {
    /// Repeated conversions can come back under the same file URL; the `t`
    /// query parameter keeps the shell's audio element from reusing a cached
    /// body.
    pub fn new(file_url: String, generated_at: DateTime<Utc>) -> Self {
        let play_url = format!("{}?t={}", file_url, generated_at.timestamp_millis());
        Self {
            file_url,
            play_url,
            generated_at,
        }
    }
}

/// A truncated record of a past successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub display_text: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(text: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            display_text: truncate_display(text),
            timestamp,
        }
    }
}

fn truncate_display(text: &str) -> String {
    if text.chars().count() <= DISPLAY_TEXT_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(DISPLAY_TEXT_CHARS).collect();
    format!("{}{}", head, ELLIPSIS)
}

/// Most-recent-first list of past conversions, capped at
/// `MAX_HISTORY_ENTRIES`. In-memory only; dropped with the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHistory {
    entries: Vec<HistoryEntry>,
}

impl RecentHistory {
    /// One synthetic entry greets the user before any conversion has run.
    /// Unlike recorded entries it is stored verbatim, untruncated.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                display_text: WELCOME_TEXT.to_string(),
                timestamp: now,
            }],
        }
    }

    pub fn record(&mut self, text: &str, timestamp: DateTime<Utc>) {
        self.entries.insert(0, HistoryEntry::new(text, timestamp));
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
