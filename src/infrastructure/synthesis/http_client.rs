use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use super::{SynthesisClient, SynthesisError, SynthesisErrorBody, SynthesisResponse};
use crate::domain::conversion::ConversionRequest;
use crate::domain::session::AccessToken;

pub const X_REQUEST_ID: &str = "x-request-id";

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
}

/// reqwest-backed client for the synthesis endpoint.
pub struct HttpSynthesisClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl HttpSynthesisClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SynthesisClient for HttpSynthesisClient {
    async fn synthesize(
        &self,
        request: &ConversionRequest,
        access_token: &AccessToken,
        request_id: Uuid,
    ) -> Result<SynthesisResponse, SynthesisError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(access_token.expose())
            .header(X_REQUEST_ID, request_id.to_string())
            .json(&SynthesisBody {
                text: request.text(),
            })
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // The error body is optional; absence falls back to a generic
            // message at the submission boundary.
            let message = response
                .json::<SynthesisErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(SynthesisError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SynthesisResponse>()
            .await
            .map_err(|e| SynthesisError::Unexpected(format!("invalid synthesis response: {}", e)))
    }
}

/// Builder problems never reached the wire; connect/timeout/request errors
/// got no response back.
fn classify_transport_error(err: reqwest::Error) -> SynthesisError {
    if err.is_builder() {
        SynthesisError::Unexpected(err.to_string())
    } else if err.is_connect() || err.is_timeout() || err.is_request() {
        SynthesisError::Network(err)
    } else {
        SynthesisError::Unexpected(err.to_string())
    }
}
