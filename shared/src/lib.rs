//! Shared types for the story workflow system
//!
//! Contains the domain data model, the wire message payloads exchanged with
//! the remote story service, and the remote failure taxonomy. Controller
//! internals (slots, in-flight guards) live in the controller crate.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::{RemoteFailure, RemoteResult};
pub use types::*;

// Re-export the wire payloads grouped by concern
pub use messages::{
    // Account operations
    LoginRequest, LoginResponse, RegisterRequest,

    // Story generation and persistence
    GenerateRequest, GenerateResponse, ListStoriesResponse, SaveRequest, SaveResponse,

    // Derived artifacts
    ImageRequest, ImageResponse, PdfRequest, PdfResponse,
};
