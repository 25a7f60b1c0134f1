pub mod error;
pub mod model;
pub mod service;

pub use error::ConversionError;
pub use model::{
    ConversionRequest, HistoryEntry, PlayableAudio, RecentHistory, DISPLAY_TEXT_CHARS,
    MAX_HISTORY_ENTRIES, MAX_TEXT_CHARS,
};
pub use service::{ConversionWorkflow, SubmitOutcome};
