use crate::infrastructure::synthesis::SynthesisError;

/// Everything that can go wrong between a submit and its notification.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("text cannot be empty")]
    EmptyText,

    #[error("text must be {max} characters or less")]
    TextTooLong { max: usize },

    #[error("synthesis response did not contain a file URL")]
    MissingFileUrl,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl ConversionError {
    /// True for input problems caught before any network call; the workflow
    /// surfaces these as warnings rather than errors.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyText | Self::TextTooLong { .. })
    }

    /// The exact transient message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyText => "Please enter some text to convert".to_string(),
            Self::TextTooLong { max } => {
                format!("Text must be {} characters or less", max)
            }
            Self::MissingFileUrl => "No audio URL received".to_string(),
            Self::Synthesis(SynthesisError::Server {
                message: Some(message),
                ..
            }) => message.clone(),
            Self::Synthesis(SynthesisError::Server { message: None, .. }) => {
                "Error generating audio. Please try again.".to_string()
            }
            Self::Synthesis(SynthesisError::Network(_)) => {
                "Failed to connect to the server. Please check your network or CORS settings."
                    .to_string()
            }
            Self::Synthesis(SynthesisError::Unexpected(_)) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}
