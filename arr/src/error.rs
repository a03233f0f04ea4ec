use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArrError {
    #[error("You requested {requested} items, but there are only {available} items available")]
    InsufficientItems { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, ArrError>;
