//! Client error types.

use std::fmt;

use studentlund_feed::FeedError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error.
    Config(String),
    /// Fetching or translating a feed failed.
    Feed(FeedError),
    /// IO error.
    Io(std::io::Error),
    /// Rendering output failed.
    Output(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Feed(err) => write!(f, "feed error: {}", err),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Output(msg) => write!(f, "output error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Feed(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<FeedError> for ClientError {
    fn from(err: FeedError) -> Self {
        Self::Feed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn feed_error_is_source() {
        let err = ClientError::from(FeedError::fetch("unexpected status 503"));
        assert_eq!(
            err.to_string(),
            "feed error: fetch_failed: unexpected status 503"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_display() {
        let err = ClientError::Config("failed to parse config: expected `=`".into());
        assert_eq!(
            err.to_string(),
            "configuration error: failed to parse config: expected `=`"
        );
        assert!(err.source().is_none());
    }
}
