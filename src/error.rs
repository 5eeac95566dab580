//! Error types and handling for the ShoreSquad service

use thiserror::Error;

/// Main error type for the ShoreSquad service
#[derive(Error, Debug)]
pub enum ShoreSquadError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ShoreSquadError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ShoreSquadError::Config { .. } => {
                "Configuration error. Please check your SHORESQUAD_* environment settings."
                    .to_string()
            }
            ShoreSquadError::Api { .. } => {
                "Unable to reach the weather service. Showing demo data instead.".to_string()
            }
            ShoreSquadError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ShoreSquadError::Io { .. } => {
                "File or network operation failed. Please check permissions and ports.".to_string()
            }
            ShoreSquadError::General { message } => message.clone(),
        }
    }
}
