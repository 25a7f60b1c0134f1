use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::conversion::{ConversionWorkflow, SubmitOutcome};
use crate::domain::session::{Session, SessionError, SessionGate};
use crate::domain::shared::Notifier;
use crate::infrastructure::config::{Config, LogFormat};
use crate::infrastructure::identity::{HostedUiIdentityProvider, Navigator};
use crate::infrastructure::synthesis::HttpSynthesisClient;

/// Composition root: wires the identity and synthesis collaborators into the
/// session gate and the conversion workflow. The shell supplies the two
/// capabilities it owns, browser navigation and transient notifications.
pub struct App {
    gate: Arc<SessionGate>,
    workflow: Arc<ConversionWorkflow>,
}

impl App {
    pub fn new(config: &Config, navigator: Arc<dyn Navigator>, notifier: Arc<dyn Notifier>) -> Self {
        let identity = Arc::new(HostedUiIdentityProvider::new(
            config.authority.clone(),
            config.client_id.clone(),
            config.redirect_uri.clone(),
            navigator,
        ));
        let synthesis = Arc::new(HttpSynthesisClient::new(config.synthesis_url.clone()));

        let gate = Arc::new(SessionGate::new(identity));
        let workflow = Arc::new(ConversionWorkflow::new(synthesis, notifier));

        Self { gate, workflow }
    }

    pub fn gate(&self) -> &Arc<SessionGate> {
        &self.gate
    }

    pub fn workflow(&self) -> &Arc<ConversionWorkflow> {
        &self.workflow
    }

    /// The workflow is reachable only behind an authenticated gate; the
    /// session's access token rides along on the synthesis call.
    pub async fn convert(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        match self.gate.session().await {
            Session::Authenticated { access_token } => {
                Ok(self.workflow.submit(text, &access_token).await)
            }
            _ => Err(SessionError::NotAuthenticated),
        }
    }
}

pub fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speakify=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speakify=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
