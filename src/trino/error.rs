//! Trino Errors
//! Transport, protocol and server-side statement failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrinoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid coordinator URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("coordinator answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{name}: {message}")]
    Query { name: String, message: String },
    #[error("unexpected response: {0}")]
    Malformed(String),
}
