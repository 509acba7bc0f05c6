//! Controller state management
//!
//! All mutable workflow state lives here: the session credential, the
//! editable roster and scene fields, the single active-generation and
//! displayed-story slots, the catalog cache, and the concurrency guards.
//! Operations in `controller_impl` are the only mutation path.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::types::{ActiveGeneration, ArtifactSet, Operation};
use shared::{Credential, Roster, StoryId, StoryRecord, StorySummary};

/// One in-flight flag per remote operation kind.
///
/// Acquired with compare-exchange so overlapping invocations of the same
/// kind fail fast instead of racing two requests against one slot.
#[derive(Debug, Default)]
struct InFlightFlags {
    generation: AtomicBool,
    save: AtomicBool,
    catalog_refresh: AtomicBool,
    catalog_delete: AtomicBool,
    story_load: AtomicBool,
    image: AtomicBool,
    export: AtomicBool,
}

impl InFlightFlags {
    fn slot(&self, operation: Operation) -> &AtomicBool {
        match operation {
            Operation::Generation => &self.generation,
            Operation::Save => &self.save,
            Operation::CatalogRefresh => &self.catalog_refresh,
            Operation::CatalogDelete => &self.catalog_delete,
            Operation::StoryLoad => &self.story_load,
            Operation::Image => &self.image,
            Operation::Export => &self.export,
        }
    }
}

/// Core workflow state
#[derive(Debug)]
pub struct ControllerState {
    // Session credential; absence means unauthenticated
    pub session: RwLock<Option<Credential>>,

    // Authoring inputs
    pub roster: RwLock<Roster>,
    pub scene: RwLock<String>,
    pub scenario: RwLock<String>,

    // Workflow slots
    pub active: RwLock<Option<ActiveGeneration>>,
    pub displayed: RwLock<Option<StoryRecord>>,
    pub artifacts: RwLock<ArtifactSet>,

    // Catalog cache mirrored from the remote service
    pub catalog: RwLock<Vec<StorySummary>>,
    pub selected: RwLock<Option<StoryId>>,

    // Concurrency guards
    in_flight: InFlightFlags,
    generation_epoch: AtomicU64,
    display_epoch: AtomicU64,
}

impl ControllerState {
    /// Fresh unauthenticated state with a single blank character
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
            roster: RwLock::new(Roster::new()),
            scene: RwLock::new(String::new()),
            scenario: RwLock::new(String::new()),
            active: RwLock::new(None),
            displayed: RwLock::new(None),
            artifacts: RwLock::new(ArtifactSet::default()),
            catalog: RwLock::new(Vec::new()),
            selected: RwLock::new(None),
            in_flight: InFlightFlags::default(),
            generation_epoch: AtomicU64::new(0),
            display_epoch: AtomicU64::new(0),
        }
    }

    /// Whether a credential is currently held
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Snapshot of the current credential, if any
    pub async fn credential(&self) -> Option<Credential> {
        self.session.read().await.clone()
    }

    /// Try to mark `operation` as in flight; false if one already is
    pub fn begin_operation(&self, operation: Operation) -> bool {
        self.in_flight
            .slot(operation)
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the in-flight flag for `operation`
    pub fn finish_operation(&self, operation: Operation) {
        self.in_flight.slot(operation).store(false, Ordering::Release);
    }

    /// Whether a request of this kind is currently pending
    pub fn operation_in_flight(&self, operation: Operation) -> bool {
        self.in_flight.slot(operation).load(Ordering::Acquire)
    }

    /// Identity token for the active-generation slot
    pub fn generation_epoch(&self) -> u64 {
        self.generation_epoch.load(Ordering::Acquire)
    }

    /// Invalidate in-flight generation results
    pub fn bump_generation_epoch(&self) {
        self.generation_epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Identity token for the displayed-story slot
    pub fn display_epoch(&self) -> u64 {
        self.display_epoch.load(Ordering::Acquire)
    }

    /// Invalidate in-flight artifact results
    pub fn bump_display_epoch(&self) {
        self.display_epoch.fetch_add(1, Ordering::AcqRel);
    }

    /// Drop the credential and every slot derived from authenticated state.
    ///
    /// Called when the remote service rejects the session credential; any
    /// response still in flight becomes stale through the epoch bumps.
    pub async fn invalidate_session(&self) {
        *self.session.write().await = None;
        *self.active.write().await = None;
        *self.displayed.write().await = None;
        self.artifacts.write().await.clear();
        self.catalog.write().await.clear();
        *self.selected.write().await = None;
        self.bump_generation_epoch();
        self.bump_display_epoch();
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}
