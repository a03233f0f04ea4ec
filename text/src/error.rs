use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid pattern: {source}")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },

    #[error("Base64 decode error: {source}")]
    DecodeError {
        #[from]
        source: base64::DecodeError,
    },

    #[error("Decoded bytes are not valid UTF-8: {source}")]
    Utf8Error {
        #[from]
        source: std::string::FromUtf8Error,
    },

    // Raised when a dynamic replacement value is neither text nor a callback.
    #[error("Unsupported replacement type: {0}")]
    UnsupportedReplacement(&'static str),
}

pub type Result<T> = std::result::Result<T, TextError>;
