use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown focus area `{0}`")]
    UnknownFocusArea(String),
    #[error("unknown entry `{0}`")]
    UnknownEntry(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Message safe to show verbatim in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownFocusArea(_) | Self::UnknownEntry(_) => {
                "The requested entry could not be found.".to_owned()
            }
            Self::Validation(message) => message.clone(),
        }
    }
}
