use thiserror::Error;

use crate::generator::GeneratorError;

/// Application-wide error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
