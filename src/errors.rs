use log::SetLoggerError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmoothieMakerError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),
    #[error("Could not initialize the logger: {0}")]
    LoggerError(String),
}

impl From<SetLoggerError> for SmoothieMakerError {
    fn from(error: SetLoggerError) -> Self {
        SmoothieMakerError::LoggerError(error.to_string())
    }
}
