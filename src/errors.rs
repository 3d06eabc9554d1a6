use std::time::Duration;

use mongodb::error::Error as MongoError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Timed out after {timeout:?} connecting to MongoDB: {message}")]
    ConnectionTimeout { timeout: Duration, message: String },

    #[error("DB not initialised, call DatabaseContext::connect() first")]
    Uninitialized,

    #[error("{0}")]
    Mongo(#[from] MongoError),
}

impl Error {
    pub fn missing_config(variable: &str) -> Self {
        Error::Configuration(ConfigurationError {
            message: format!(
                "{variable} is not set. Copy .env.example to .env and fill it in."
            ),
        })
    }

    pub fn connection_timeout(timeout: Duration, message: &str) -> Self {
        Error::ConnectionTimeout {
            timeout,
            message: message.to_string(),
        }
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Self {
        Error::Configuration(ConfigurationError {
            message: format!("Invalid configuration: {}", err.to_string().trim()),
        })
    }
}

#[derive(thiserror::Error, Debug)]
#[error("Configuration error: {message}")]
pub struct ConfigurationError {
    pub message: String,
}
