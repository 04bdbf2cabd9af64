use thiserror::Error;

/// Why a single URL did not end up on disk.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{message}")]
    Network { message: String },

    #[error("server responded with status {status}")]
    Status { status: u16 },

    #[error("not an image, got {content_type}")]
    NotAnImage { content_type: String },

    #[error("duplicate content: {file_name}")]
    Duplicate { file_name: String },

    #[error("could not read response body: {message}")]
    Body { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Connection,
    NotAnImage,
    Duplicate,
    Unexpected,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::InvalidUrl(_)
            | FetchError::Network { .. }
            | FetchError::Status { .. }
            | FetchError::Body { .. } => ErrorCategory::Connection,
            FetchError::NotAnImage { .. } => ErrorCategory::NotAnImage,
            FetchError::Duplicate { .. } => ErrorCategory::Duplicate,
            FetchError::Io(_) => ErrorCategory::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::{ErrorCategory, FetchError};

    #[test]
    fn test_categories() {
        let error = FetchError::Status { status: 404 };
        assert_eq!(error.category(), ErrorCategory::Connection);

        let error = FetchError::from(url::Url::parse("not a url").unwrap_err());
        assert_eq!(error.category(), ErrorCategory::Connection);

        let error = FetchError::Body {
            message: "connection reset by peer".to_string(),
        };
        assert_eq!(error.category(), ErrorCategory::Connection);

        let error = FetchError::NotAnImage {
            content_type: "text/html".to_string(),
        };
        assert_eq!(error.category(), ErrorCategory::NotAnImage);

        let error = FetchError::from(std::io::Error::other("disk full"));
        assert_eq!(error.category(), ErrorCategory::Unexpected);
    }

    #[test]
    fn test_status_message() {
        let error = FetchError::Status { status: 503 };

        assert_eq!(error.to_string(), "server responded with status 503");
    }
}
