use crate::validate::Violation;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing or invalid configuration: {0}")]
    Config(#[from] envy::Error),

    #[error("Catalog failed validation with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Error while sending HTTP request: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Registry returned {status}: {body}")]
    Response { status: StatusCode, body: String },

    #[error("Rate limited by registry, retry after {retry_after}s")]
    RateLimited { retry_after: f64 },
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
