use std::fmt;

/// Opaque bearer credential attached to synthesis requests.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// The token value stays out of logs and debug output.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Authentication state of the current tab, sourced from the identity
/// provider. Read-only to the conversion workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Loading,
    Unauthenticated,
    Authenticated { access_token: AccessToken },
    Errored { message: String },
}

/// Provider-callback surface that drives session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignInStarted,
    Authenticated { access_token: AccessToken },
    NotAuthenticated,
    AuthFailed { message: String },
    SignedOut,
}

/// The four top-level views; the gate presents exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    Loading,
    SignIn,
    Error { message: String },
    Workspace,
}

impl Session {
    pub fn label(&self) -> &'static str {
        match self {
            Session::Loading => "loading",
            Session::Unauthenticated => "unauthenticated",
            Session::Authenticated { .. } => "authenticated",
            Session::Errored { .. } => "errored",
        }
    }

    pub fn view(&self) -> GateView {
        match self {
            Session::Loading => GateView::Loading,
            Session::Unauthenticated => GateView::SignIn,
            Session::Authenticated { .. } => GateView::Workspace,
            Session::Errored { message } => GateView::Error {
                message: message.clone(),
            },
        }
    }

    /// Applies one event to the transition table; `None` means the
    /// transition is not permitted from this state.
    pub fn apply(&self, event: &SessionEvent) -> Option<Session> {
        match (self, event) {
            (Session::Loading, SessionEvent::Authenticated { access_token }) => {
                Some(Session::Authenticated {
                    access_token: access_token.clone(),
                })
            }
            (Session::Loading, SessionEvent::NotAuthenticated) => Some(Session::Unauthenticated),
            (Session::Loading, SessionEvent::AuthFailed { message }) => Some(Session::Errored {
                message: message.clone(),
            }),
            (
                Session::Unauthenticated | Session::Errored { .. },
                SessionEvent::SignInStarted,
            ) => Some(Session::Loading),
            (Session::Authenticated { .. }, SessionEvent::SignedOut) => {
                Some(Session::Unauthenticated)
            }
            _ => None,
        }
    }
}
