pub mod http_client;

pub use http_client::HttpSynthesisClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::conversion::ConversionRequest;
use crate::domain::session::AccessToken;

/// Success body from the synthesis endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisResponse {
    /// URL of the generated audio file. A well-formed body without it means
    /// the conversion failed upstream even though the call came back 2xx.
    #[serde(rename = "fileUrl", skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Error body from the synthesis endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Transport-level failure buckets, in classification priority order.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The service answered with an error status.
    #[error("synthesis service returned status {status}")]
    Server { status: u16, message: Option<String> },

    /// The request went out but no response came back.
    #[error("no response from the synthesis service")]
    Network(#[source] reqwest::Error),

    /// Anything else: request construction, body decoding.
    #[error("unexpected synthesis failure: {0}")]
    Unexpected(String),
}

/// External speech-synthesis collaborator: one authenticated POST.
///
/// Abstracted behind a trait so the workflow is testable with a stub and the
/// transport can change without touching the domain.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    async fn synthesize(
        &self,
        request: &ConversionRequest,
        access_token: &AccessToken,
        request_id: Uuid,
    ) -> Result<SynthesisResponse, SynthesisError>;
}
