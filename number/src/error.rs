use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumberError {
    #[error("Configuration error: {source}")]
    ConfigError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, NumberError>;
