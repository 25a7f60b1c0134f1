#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The identity provider reported a failure; the message is surfaced
    /// verbatim in the error view.
    #[error("{0}")]
    Provider(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("{operation} is not available while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },
}
