use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid rating: {0} (expected 1..=5)")]
    InvalidRating(i64),
    #[error("Invalid flavor: {0:?}")]
    InvalidFlavor(String),
    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}
