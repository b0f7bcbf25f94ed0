use thiserror::Error;

pub type Result<T> = std::result::Result<T, WheelError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WheelError {
    #[error("config load failed: {0}")]
    ConfigLoad(String),

    #[error("persisted state unreadable: {0}")]
    PersistenceRead(String),

    #[error("could not save wheels: {0}")]
    PersistenceWrite(String),

    /// Carries the notice shown to the user.
    #[error("{0}")]
    InvariantViolation(&'static str),

    #[error("segment index {index} out of range for {len} segments")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("wheel {0} not found")]
    NotFound(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl WheelError {
    /// Errors the user caused and should be told about, as opposed to
    /// wiring mistakes.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            WheelError::InvariantViolation(_) | WheelError::InvalidField { .. }
        )
    }
}
