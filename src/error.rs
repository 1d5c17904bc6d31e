use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnticipaError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AnticipaError>;
