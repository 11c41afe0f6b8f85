use thiserror::Error;

/// Failure of a backend call, as seen by the console.
///
/// Every variant is non-fatal: the caller shows a notification and keeps the
/// last good data on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("session is no longer authorized")]
    Unauthorized,

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-success HTTP status onto an error
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized,
            other => ApiError::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404), ApiError::Status(404));
    }
}
