//! Trait definitions for the remote story service
//!
//! The remote collaborator is split by concern into three traits so the
//! workflow controller can be driven by mock implementations in tests.
//! Every authenticated call takes the session credential explicitly; the
//! transport decides how to attach it.

use async_trait::async_trait;

use shared::{ArtifactRef, Credential, RemoteResult, Roster, StoryId, StoryRecord, StorySummary};

/// Account operations. Registration never implies login.
#[mockall::automock]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account; local session state is not changed
    async fn register(&self, username: &str, password: &str) -> RemoteResult<()>;

    /// Exchange credentials for a bearer token
    async fn login(&self, username: &str, password: &str) -> RemoteResult<Credential>;
}

/// Persisted story operations. The remote service is the sole source of
/// truth for the catalog; the controller only caches snapshots.
#[mockall::automock]
#[async_trait]
pub trait StoryApi: Send + Sync {
    /// Persist the given text under a title, returning the assigned id
    async fn save_story(
        &self,
        credential: &Credential,
        title: &str,
        content: &str,
    ) -> RemoteResult<StoryId>;

    /// Fetch the full (id, title) catalog snapshot
    async fn list_stories(&self, credential: &Credential) -> RemoteResult<Vec<StorySummary>>;

    /// Fetch one story with its content
    async fn get_story(&self, credential: &Credential, id: StoryId) -> RemoteResult<StoryRecord>;

    /// Delete one story
    async fn delete_story(&self, credential: &Credential, id: StoryId) -> RemoteResult<()>;
}

/// Generation operations: prose, image, and PDF rendering are all delegated
/// to the remote service as best-effort single attempts.
#[mockall::automock]
#[async_trait]
pub trait GenerationApi: Send + Sync {
    /// Generate story text from a character roster, scene, and scenario
    async fn generate_story(
        &self,
        credential: &Credential,
        roster: Roster,
        scene: &str,
        scenario: &str,
    ) -> RemoteResult<String>;

    /// Generate an illustrative image from a derived prompt
    async fn generate_image(&self, credential: &Credential, prompt: &str) -> RemoteResult<ArtifactRef>;

    /// Render a PDF bundling title, story text, and optionally the image
    async fn export_pdf(
        &self,
        credential: &Credential,
        title: &str,
        content: &str,
        image: Option<ArtifactRef>,
    ) -> RemoteResult<ArtifactRef>;
}
