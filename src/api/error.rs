// src/api/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Status(reqwest::StatusCode),
}

pub type ApiResult<T> = Result<T, ApiError>;
