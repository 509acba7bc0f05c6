//! Failure taxonomy for the remote story service
//!
//! Every remote operation resolves to success-with-payload or one of these
//! causes. The controller never inspects failure payloads beyond this enum;
//! presentation is left to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    #[error("credential rejected by the remote service")]
    AuthenticationFailed,

    #[error("requested resource not found")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("remote service unavailable")]
    ServiceUnavailable,

    #[error("remote server error: {0}")]
    ServerError(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("invalid response from remote service: {0}")]
    InvalidResponse(String),
}

pub type RemoteResult<T> = Result<T, RemoteFailure>;
