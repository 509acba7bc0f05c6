//! Controller error types
//!
//! Local validation and concurrency errors are generated synchronously and
//! never reach the wire; remote failures are surfaced verbatim for display.

use thiserror::Error;

use crate::types::Operation;
use shared::RemoteFailure;

/// Result type for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Controller error taxonomy, distinguishable by the caller so a UI can
/// render field-specific vs. global failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("operation requires an authenticated session")]
    NotAuthenticated,

    #[error("validation failed: {field}")]
    ValidationFailed { field: &'static str },

    #[error("a {0} request is already in flight")]
    AlreadyInProgress(Operation),

    #[error("response arrived after a superseding state change")]
    Stale,

    #[error("remote operation failed: {0}")]
    Remote(#[from] RemoteFailure),
}

impl ControllerError {
    pub fn validation(field: &'static str) -> Self {
        ControllerError::ValidationFailed { field }
    }
}
