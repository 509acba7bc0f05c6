//! Workflow controller implementation with dependency injection
//!
//! Sequences the authoring / generation / save / display / export lifecycle
//! over the injected remote APIs. Every operation validates locally before
//! touching the network, holds at most one in-flight request per operation
//! kind, and discards completions that no longer match current state.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{ControllerError, ControllerResult};
use crate::state::ControllerState;
use crate::traits::{AuthApi, GenerationApi, StoryApi};
use crate::types::{image_prompt, ActiveGeneration, Operation};
use shared::{
    ArtifactRef, Credential, EmotionKind, EmotionVector, RemoteFailure, Roster, StoryId,
    StoryRecord, StorySummary,
};

/// Workflow controller with dependency injection
pub struct WorkflowController<A, S, G>
where
    A: AuthApi,
    S: StoryApi,
    G: GenerationApi,
{
    pub state: Arc<ControllerState>,
    pub auth_api: A,
    pub story_api: S,
    pub generation_api: G,
}

impl<A, S, G> WorkflowController<A, S, G>
where
    A: AuthApi,
    S: StoryApi,
    G: GenerationApi,
{
    /// Create a new controller in the unauthenticated idle state
    pub fn new(auth_api: A, story_api: S, generation_api: G) -> Self {
        Self {
            state: Arc::new(ControllerState::new()),
            auth_api,
            story_api,
            generation_api,
        }
    }

    /// Snapshot the credential or fail fast before any network call
    async fn require_credential(&self) -> ControllerResult<Credential> {
        self.state
            .credential()
            .await
            .ok_or(ControllerError::NotAuthenticated)
    }

    /// Map a remote failure on an authenticated call, invalidating the
    /// session when the credential itself was rejected
    async fn remote_failure(&self, failure: RemoteFailure) -> ControllerError {
        if failure == RemoteFailure::AuthenticationFailed {
            warn!("remote service rejected the session credential");
            self.state.invalidate_session().await;
        }
        ControllerError::Remote(failure)
    }

    // ---- session -------------------------------------------------------

    /// Create an account. Registration does not imply login; local session
    /// state is unchanged either way.
    pub async fn register(&self, username: &str, password: &str) -> ControllerResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ControllerError::validation("username"));
        }
        if password.is_empty() {
            return Err(ControllerError::validation("password"));
        }

        self.auth_api
            .register(username, password)
            .await
            .map_err(ControllerError::Remote)?;
        info!(username, "account registered");
        Ok(())
    }

    /// Exchange credentials for a session. The credential is stored before
    /// the triggered catalog refresh, so the refresh never races a
    /// still-unauthenticated request; a refresh failure does not undo the
    /// login.
    pub async fn login(&self, username: &str, password: &str) -> ControllerResult<Credential> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ControllerError::validation("username"));
        }
        if password.is_empty() {
            return Err(ControllerError::validation("password"));
        }

        let credential = self
            .auth_api
            .login(username, password)
            .await
            .map_err(ControllerError::Remote)?;

        *self.state.session.write().await = Some(credential.clone());
        info!(username, "session authenticated");

        if let Err(error) = self.refresh_catalog().await {
            warn!(%error, "catalog refresh after login failed");
        }
        Ok(credential)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.is_authenticated().await
    }

    // ---- roster and scene editing --------------------------------------

    /// Rename the character at `index`
    pub async fn set_name(&self, index: usize, value: &str) -> ControllerResult<()> {
        let mut roster = self.state.roster.write().await;
        let character = roster
            .get_mut(index)
            .ok_or(ControllerError::validation("character"))?;
        character.name = value.to_string();
        Ok(())
    }

    /// Set one emotion dimension from untrusted editor input.
    ///
    /// The raw value must parse as an integer; parse failures are rejected
    /// without mutating state. Parsed values are clamped into
    /// [0, MAX_INTENSITY].
    pub async fn set_emotion(&self, index: usize, kind: EmotionKind, raw: &str) -> ControllerResult<()> {
        let parsed: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ControllerError::validation("emotion"))?;
        let intensity = parsed.clamp(0, i64::from(EmotionVector::MAX_INTENSITY)) as u8;

        let mut roster = self.state.roster.write().await;
        let character = roster
            .get_mut(index)
            .ok_or(ControllerError::validation("character"))?;
        character.emotions.set(kind, intensity);
        Ok(())
    }

    /// Append a blank character, returning its index
    pub async fn add_character(&self) -> usize {
        self.state.roster.write().await.add()
    }

    /// Remove a character; no-op (false) when it would empty the roster
    pub async fn remove_character(&self, index: usize) -> bool {
        self.state.roster.write().await.remove(index)
    }

    pub async fn set_scene(&self, value: &str) {
        *self.state.scene.write().await = value.to_string();
    }

    pub async fn set_scenario(&self, value: &str) {
        *self.state.scenario.write().await = value.to_string();
    }

    /// Update the title draft on the active generation
    pub async fn set_title_draft(&self, value: &str) -> ControllerResult<()> {
        match self.state.active.write().await.as_mut() {
            Some(active) => {
                active.title_draft = value.to_string();
                Ok(())
            }
            None => Err(ControllerError::validation("generation")),
        }
    }

    // ---- generation cycle ----------------------------------------------

    /// Submit the roster, scene, and scenario for story generation.
    ///
    /// Rejected locally without a network call when unauthenticated, when no
    /// character is named, or when scene/scenario are empty after trimming.
    /// At most one generation may be in flight; a success that arrives after
    /// a reset is discarded as stale.
    pub async fn submit_generation(&self) -> ControllerResult<ActiveGeneration> {
        let credential = self.require_credential().await?;

        let roster = self.state.roster.read().await.clone();
        if !roster.has_named_character() {
            return Err(ControllerError::validation("roster"));
        }
        let scene = self.state.scene.read().await.trim().to_string();
        if scene.is_empty() {
            return Err(ControllerError::validation("scene"));
        }
        let scenario = self.state.scenario.read().await.trim().to_string();
        if scenario.is_empty() {
            return Err(ControllerError::validation("scenario"));
        }

        if !self.state.begin_operation(Operation::Generation) {
            return Err(ControllerError::AlreadyInProgress(Operation::Generation));
        }
        let epoch = self.state.generation_epoch();
        debug!(characters = roster.len(), %scene, %scenario, "submitting generation request");
        let result = self
            .generation_api
            .generate_story(&credential, roster, &scene, &scenario)
            .await;
        self.state.finish_operation(Operation::Generation);

        let text = match result {
            Ok(text) => text,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        if self.state.generation_epoch() != epoch {
            debug!("discarding generation result superseded by a reset");
            return Err(ControllerError::Stale);
        }

        let generation = ActiveGeneration::new(text);
        *self.state.active.write().await = Some(generation.clone());
        info!("generation installed as active story");
        Ok(generation)
    }

    /// Clear the authoring inputs and the active generation. Idempotent and
    /// always available; an in-flight generation result becomes stale.
    pub async fn reset(&self) {
        *self.state.roster.write().await = Roster::new();
        self.state.scene.write().await.clear();
        self.state.scenario.write().await.clear();
        *self.state.active.write().await = None;
        self.state.bump_generation_epoch();
        debug!("authoring state reset");
    }

    /// Persist the active generation under `title`, returning the assigned
    /// story id. Success clears the active slot and refreshes the catalog.
    pub async fn save_active(&self, title: &str) -> ControllerResult<StoryId> {
        let credential = self.require_credential().await?;
        let title = title.trim();
        if title.is_empty() {
            return Err(ControllerError::validation("title"));
        }
        let text = match self.state.active.read().await.as_ref() {
            Some(active) => active.text.clone(),
            None => return Err(ControllerError::validation("generation")),
        };

        if !self.state.begin_operation(Operation::Save) {
            return Err(ControllerError::AlreadyInProgress(Operation::Save));
        }
        let result = self.story_api.save_story(&credential, title, &text).await;
        self.state.finish_operation(Operation::Save);

        let id = match result {
            Ok(id) => id,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        // Clear the slot only if it still holds the text that was saved
        {
            let mut active = self.state.active.write().await;
            if active.as_ref().is_some_and(|a| a.text == text) {
                *active = None;
            }
        }
        info!(%id, "story saved");

        if let Err(error) = self.refresh_catalog().await {
            warn!(%error, "catalog refresh after save failed");
        }
        Ok(id)
    }

    // ---- catalog -------------------------------------------------------

    /// Replace the catalog with a fresh snapshot from the remote service
    pub async fn refresh_catalog(&self) -> ControllerResult<Vec<StorySummary>> {
        let credential = self.require_credential().await?;

        if !self.state.begin_operation(Operation::CatalogRefresh) {
            return Err(ControllerError::AlreadyInProgress(Operation::CatalogRefresh));
        }
        let result = self.story_api.list_stories(&credential).await;
        self.state.finish_operation(Operation::CatalogRefresh);

        let stories = match result {
            Ok(stories) => stories,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        *self.state.catalog.write().await = stories.clone();
        // Selection must always point into the latest snapshot
        {
            let mut selected = self.state.selected.write().await;
            if let Some(id) = *selected {
                if !stories.iter().any(|s| s.id == id) {
                    *selected = None;
                }
            }
        }
        debug!(count = stories.len(), "catalog refreshed");
        Ok(stories)
    }

    /// Point the selection at a catalog entry without fetching its content
    pub async fn select_story(&self, id: StoryId) -> ControllerResult<()> {
        if !self.state.catalog.read().await.iter().any(|s| s.id == id) {
            return Err(ControllerError::validation("story"));
        }
        *self.state.selected.write().await = Some(id);
        Ok(())
    }

    /// Delete a persisted story. Catalog consistency is restored by
    /// re-fetching, not by local removal, to tolerate concurrent external
    /// mutation.
    pub async fn delete_story(&self, id: StoryId) -> ControllerResult<()> {
        let credential = self.require_credential().await?;

        if !self.state.begin_operation(Operation::CatalogDelete) {
            return Err(ControllerError::AlreadyInProgress(Operation::CatalogDelete));
        }
        let result = self.story_api.delete_story(&credential, id).await;
        self.state.finish_operation(Operation::CatalogDelete);

        if let Err(failure) = result {
            return Err(self.remote_failure(failure).await);
        }

        {
            let mut selected = self.state.selected.write().await;
            if *selected == Some(id) {
                *selected = None;
            }
        }
        info!(%id, "story deleted");
        self.refresh_catalog().await?;
        Ok(())
    }

    /// Fetch the selected story and install it as the displayed story,
    /// clearing any artifacts derived from the previous one. A completion
    /// whose selection moved while the fetch was in flight is discarded.
    pub async fn load_story(&self) -> ControllerResult<StoryRecord> {
        let credential = self.require_credential().await?;
        let id = self
            .state
            .selected
            .read()
            .await
            .ok_or(ControllerError::validation("selection"))?;

        if !self.state.begin_operation(Operation::StoryLoad) {
            return Err(ControllerError::AlreadyInProgress(Operation::StoryLoad));
        }
        let result = self.story_api.get_story(&credential, id).await;
        self.state.finish_operation(Operation::StoryLoad);

        let record = match result {
            Ok(record) => record,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        if *self.state.selected.read().await != Some(id) {
            debug!(%id, "discarding loaded story; selection moved");
            return Err(ControllerError::Stale);
        }

        *self.state.displayed.write().await = Some(record.clone());
        self.state.artifacts.write().await.clear();
        self.state.bump_display_epoch();
        info!(%id, "story displayed");
        Ok(record)
    }

    // ---- derived artifacts ---------------------------------------------

    /// Generate an illustrative image for the displayed story.
    ///
    /// The prompt is derived deterministically from the displayed content
    /// (first ten whitespace-delimited tokens). A result that arrives after
    /// the displayed story changed is discarded.
    pub async fn generate_image(&self) -> ControllerResult<ArtifactRef> {
        let credential = self.require_credential().await?;
        let content = match self.state.displayed.read().await.as_ref() {
            Some(story) if !story.content.trim().is_empty() => story.content.clone(),
            _ => return Err(ControllerError::validation("story")),
        };

        if !self.state.begin_operation(Operation::Image) {
            return Err(ControllerError::AlreadyInProgress(Operation::Image));
        }
        let epoch = self.state.display_epoch();
        let prompt = image_prompt(&content);
        debug!(%prompt, "requesting image generation");
        let result = self.generation_api.generate_image(&credential, &prompt).await;
        self.state.finish_operation(Operation::Image);

        let image = match result {
            Ok(image) => image,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        if self.state.display_epoch() != epoch {
            debug!("discarding image for a story no longer displayed");
            return Err(ControllerError::Stale);
        }

        self.state.artifacts.write().await.image = Some(image.clone());
        info!(%image, "image artifact ready");
        Ok(image)
    }

    /// Export the displayed story as a PDF, bundling the current image
    /// reference when one exists (text-only export otherwise). Never
    /// mutates the catalog.
    pub async fn export_pdf(&self, title: &str) -> ControllerResult<ArtifactRef> {
        let credential = self.require_credential().await?;
        let title = title.trim();
        if title.is_empty() {
            return Err(ControllerError::validation("title"));
        }
        let content = match self.state.displayed.read().await.as_ref() {
            Some(story) if !story.content.trim().is_empty() => story.content.clone(),
            _ => return Err(ControllerError::validation("story")),
        };
        let image = self.state.artifacts.read().await.image.clone();

        if !self.state.begin_operation(Operation::Export) {
            return Err(ControllerError::AlreadyInProgress(Operation::Export));
        }
        let epoch = self.state.display_epoch();
        let result = self
            .generation_api
            .export_pdf(&credential, title, &content, image)
            .await;
        self.state.finish_operation(Operation::Export);

        let pdf = match result {
            Ok(pdf) => pdf,
            Err(failure) => return Err(self.remote_failure(failure).await),
        };

        if self.state.display_epoch() != epoch {
            debug!("discarding export for a story no longer displayed");
            return Err(ControllerError::Stale);
        }

        self.state.artifacts.write().await.pdf = Some(pdf.clone());
        info!(%pdf, "pdf export ready");
        Ok(pdf)
    }
}
