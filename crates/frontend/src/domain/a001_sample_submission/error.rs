use thiserror::Error;

/// Shown for every transport or backend failure; the user is not told which
pub const GENERIC_FAILURE_NOTICE: &str = "Failed to submit. Please try again.";

/// Reasons a batch could not be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please enter a Factory Name")]
    MissingFactoryName,

    /// `item` is 1-based, as shown next to each card
    #[error("Item {item}: {field} is required")]
    MissingField { item: usize, field: &'static str },

    #[error("Item {item}: {field} is not valid")]
    InvalidField { item: usize, field: &'static str },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server rejected the batch with status {0}")]
    Rejected(u16),
}

impl SubmitError {
    /// Caught before anything is sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::MissingFactoryName
                | SubmitError::MissingField { .. }
                | SubmitError::InvalidField { .. }
        )
    }

    /// Text for the notice banner
    pub fn user_notice(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            GENERIC_FAILURE_NOTICE.to_string()
        }
    }
}
