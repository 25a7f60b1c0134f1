use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::SessionError;
use super::model::{GateView, Session, SessionEvent};
use crate::infrastructure::identity::IdentityProvider;

/// Maps identity-provider state to exactly one of four views and mediates
/// login/logout. The conversion workflow is only reachable behind the
/// `Workspace` view.
pub struct SessionGate {
    provider: Arc<dyn IdentityProvider>,
    session: Mutex<Session>,
}

impl SessionGate {
    /// The gate starts in `Loading` until `resolve` has queried the provider.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            session: Mutex::new(Session::Loading),
        }
    }

    /// Queries the provider once at application start.
    pub async fn resolve(&self) {
        let resolved = self.provider.current_session().await;
        tracing::info!(state = resolved.label(), "session resolved");
        *self.session.lock().await = resolved;
    }

    pub async fn session(&self) -> Session {
        self.session.lock().await.clone()
    }

    pub async fn view(&self) -> GateView {
        self.session.lock().await.view()
    }

    /// Provider-callback entry point. Events outside the transition table
    /// are dropped with a warning; callbacks arrive from a collaborator the
    /// gate does not control.
    pub async fn apply(&self, event: SessionEvent) {
        let mut session = self.session.lock().await;
        match session.apply(&event) {
            Some(next) => {
                tracing::info!(from = session.label(), to = next.label(), "session transition");
                *session = next;
            }
            None => {
                tracing::warn!(state = session.label(), event = ?event, "ignoring session event");
            }
        }
    }

    /// Starts the redirect to the hosted login page. Permitted from the
    /// unauthenticated and errored states only; retry after an error goes
    /// through here as well.
    pub async fn sign_in(&self) -> Result<(), SessionError> {
        {
            let mut session = self.session.lock().await;
            match session.apply(&SessionEvent::SignInStarted) {
                Some(next) => *session = next,
                None => {
                    return Err(SessionError::InvalidTransition {
                        operation: "sign-in",
                        state: session.label(),
                    })
                }
            }
        }

        if let Err(err) = self.provider.begin_sign_in().await {
            let message = match &err {
                SessionError::Provider(message) => message.clone(),
                other => other.to_string(),
            };
            self.apply(SessionEvent::AuthFailed { message }).await;
            return Err(err);
        }
        Ok(())
    }

    /// Local session invalidation only; removes the cached user without
    /// navigating to the provider's logout endpoint.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        {
            let session = self.session.lock().await;
            if !matches!(*session, Session::Authenticated { .. }) {
                return Err(SessionError::InvalidTransition {
                    operation: "sign-out",
                    state: session.label(),
                });
            }
        }

        self.provider.remove_user().await?;
        self.apply(SessionEvent::SignedOut).await;
        Ok(())
    }

    /// Navigates the browser to the provider's hosted logout endpoint. Local
    /// state is untouched; the redirect round-trips back unauthenticated.
    pub fn sign_out_redirect(&self) {
        self.provider.sign_out_redirect();
    }
}
