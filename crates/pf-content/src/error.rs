use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a remote content fetch or form submission.
///
/// None of these is fatal to the page: fetchers turn them into a fallback
/// panel and the contact form turns them into a failure message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
