pub mod hosted_ui;

pub use hosted_ui::{HostedUiIdentityProvider, TokenResponse};

use async_trait::async_trait;

use crate::domain::session::{Session, SessionError};

/// External identity collaborator (redirect-based hosted UI).
///
/// The session gate drives all transitions through this seam, so tests can
/// stand in a stub token source instead of ambient global state.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The session as the provider currently knows it; queried at
    /// application start and after redirect completion.
    async fn current_session(&self) -> Session;

    /// Starts the redirect to the hosted login page. Nothing further is
    /// observable in-process; navigation leaves the app.
    async fn begin_sign_in(&self) -> Result<(), SessionError>;

    /// Drops the locally cached user. No navigation.
    async fn remove_user(&self) -> Result<(), SessionError>;

    /// Navigates the browser to the hosted logout endpoint.
    fn sign_out_redirect(&self);
}

/// Browser navigation capability injected by the shell.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}
