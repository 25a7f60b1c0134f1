use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::error::ConversionError;
use super::model::{ConversionRequest, HistoryEntry, PlayableAudio, RecentHistory};
use crate::domain::session::AccessToken;
use crate::domain::shared::{Notification, Notifier};
use crate::infrastructure::synthesis::SynthesisClient;

/// What a single `submit` call amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service produced audio; the result and history were updated.
    Converted(PlayableAudio),
    /// Input validation failed; nothing was sent and no state changed.
    Rejected,
    /// A request is already outstanding; this call was a no-op.
    AlreadyInFlight,
    /// The request ran and failed; the current result was cleared.
    Failed,
}

struct WorkflowState {
    audio: Option<PlayableAudio>,
    history: RecentHistory,
}

/// Owns the submission lifecycle: validate, perform exactly one in-flight
/// request at a time, interpret the response, update result and history.
pub struct ConversionWorkflow {
    synthesis: Arc<dyn SynthesisClient>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
    state: Mutex<WorkflowState>,
}

impl ConversionWorkflow {
    pub fn new(synthesis: Arc<dyn SynthesisClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            synthesis,
            notifier,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(WorkflowState {
                audio: None,
                history: RecentHistory::seeded(Utc::now()),
            }),
        }
    }

    /// Submits `text` for synthesis with the session's bearer token.
    ///
    /// Every failure mode is absorbed here and converted to exactly one
    /// notification; the in-flight flag is cleared on all exit paths and
    /// history mutates only on confirmed success.
    pub async fn submit(&self, text: &str, access_token: &AccessToken) -> SubmitOutcome {
        let request = match ConversionRequest::new(text) {
            Ok(request) => request,
            Err(err) => {
                self.notifier.notify(Notification::warning(err.user_message()));
                return SubmitOutcome::Rejected;
            }
        };

        // Owned mutual exclusion; the shell's disabled control is advisory.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("submit ignored, a request is already outstanding");
            return SubmitOutcome::AlreadyInFlight;
        }

        let request_id = Uuid::new_v4();
        tracing::info!(
            request_id = %request_id,
            text_length = request.text().len(),
            "synthesis request"
        );

        let outcome = match self
            .synthesis
            .synthesize(&request, access_token, request_id)
            .await
        {
            Ok(response) => match response.file_url {
                Some(file_url) => self.apply_success(&request, file_url).await,
                None => self.apply_failure(ConversionError::MissingFileUrl).await,
            },
            Err(err) => self.apply_failure(ConversionError::from(err)).await,
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn apply_success(&self, request: &ConversionRequest, file_url: String) -> SubmitOutcome {
        let now = Utc::now();
        let audio = PlayableAudio::new(file_url, now);

        {
            let mut state = self.state.lock().await;
            state.audio = Some(audio.clone());
            state.history.record(request.text(), now);
        }

        tracing::info!(play_url = %audio.play_url, "synthesis succeeded");
        self.notifier
            .notify(Notification::success("Audio generated successfully"));
        SubmitOutcome::Converted(audio)
    }

    async fn apply_failure(&self, err: ConversionError) -> SubmitOutcome {
        tracing::error!(error = %err, "synthesis failed");
        self.state.lock().await.audio = None;
        self.notifier
            .notify(Notification::error(err.user_message()));
        SubmitOutcome::Failed
    }

    /// True while a request is outstanding; the shell uses this to render its
    /// submit control inert.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether the shell should enable its submit control for `text`.
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_submitting() && !text.trim().is_empty()
    }

    pub async fn current_audio(&self) -> Option<PlayableAudio> {
        self.state.lock().await.audio.clone()
    }

    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.state.lock().await.history.entries().to_vec()
    }
}
