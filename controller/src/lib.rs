//! Workflow controller library for the story generation system
//!
//! This library sequences story authoring, generation, persistence, and
//! derived-artifact export against a remote story service, keeping the
//! session and workflow slots consistent under overlapping requests.

pub mod controller_impl;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export main types
pub use controller_impl::WorkflowController;
pub use error::{ControllerError, ControllerResult};
pub use state::ControllerState;
pub use types::*;

// Re-export trait definitions and their mocks
pub use traits::{
    AuthApi, GenerationApi, MockAuthApi, MockGenerationApi, MockStoryApi, StoryApi,
};

// Re-export service implementations
pub use services::HttpStoryService;
