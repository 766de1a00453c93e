// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::http::header::InvalidHeaderValue;
use config::ConfigError;
use thiserror::Error;

/// Failures that stop the server before it starts accepting requests
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid CORS origin `{origin}`: {source}")]
    InvalidOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },

    #[error("Failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}
