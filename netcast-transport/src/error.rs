//! Transport errors

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request timeout")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP client configuration failed: {0}")]
    Configuration(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Request(err)
        }
    }
}
