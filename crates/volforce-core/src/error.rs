use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Play index {index} is out of range (collection has {len} plays)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
