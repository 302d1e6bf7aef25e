use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    /// Non-2xx response from the remote service. The message is the
    /// server-supplied `message` body when present.
    #[error("{message}")]
    RemoteError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
