// ============================================================================
// ERRORS - Typed failures at the network and storage boundaries
// ============================================================================

use thiserror::Error;

use crate::utils::constants::MSG_TRANSPORT_FAILURE;
use crate::utils::phone::PhoneError;

/// Coarse error class, used by views to decide how to present a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User-correctable: shown verbatim, the form stays editable
    Validation,
    /// Network, timeout or undecodable response: shown as a generic message
    Transport,
}

/// Result of any API call, decoded once in `ApiClient`.
///
/// `Display` is the text shown to the user. Transport details are kept for
/// logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Invalid(String),
    /// The server answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{}", MSG_TRANSPORT_FAILURE)]
    Transport(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Invalid(_) | ApiError::Rejected { .. } => ErrorKind::Validation,
            ApiError::Transport(_) => ErrorKind::Transport,
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<PhoneError> for ApiError {
    fn from(err: PhoneError) -> Self {
        ApiError::Invalid(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("could not serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_hides_detail() {
        let err = ApiError::Transport("dns lookup failed for api.local".to_string());
        assert_eq!(err.user_message(), MSG_TRANSPORT_FAILURE);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn rejected_error_shows_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: "bad creds".to_string(),
        };
        assert_eq!(err.to_string(), "bad creds");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn phone_errors_become_validation_errors() {
        let err: ApiError = PhoneError::Empty.into();
        assert_eq!(err, ApiError::Invalid("Phone number is required".to_string()));
    }
}
