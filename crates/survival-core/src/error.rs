use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Survivor not found")]
    NotFound { id: u64 },
    #[error("Survivor died or escaped")]
    InvalidState { id: u64 },
    #[error("Invalid Choice")]
    InvalidChoice { decision: String },
    #[error("Missing {field}")]
    MissingField { field: &'static str },
}

impl GameError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
