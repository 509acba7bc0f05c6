//! Controller-internal data types
//!
//! The slot types owned by the workflow controller that are not part of the
//! shared wire model, plus the prompt derivation for image generation.

use std::fmt;

use shared::ArtifactRef;

/// Number of leading tokens of the displayed story used as an image prompt
pub const IMAGE_PROMPT_TOKENS: usize = 10;

/// Remote operation kinds guarded against concurrent duplicates.
///
/// At most one request of each kind may be in flight; a second invocation
/// fails fast instead of queueing or cancelling the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Generation,
    Save,
    CatalogRefresh,
    CatalogDelete,
    StoryLoad,
    Image,
    Export,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Generation => "generation",
            Operation::Save => "save",
            Operation::CatalogRefresh => "catalog refresh",
            Operation::CatalogDelete => "catalog delete",
            Operation::StoryLoad => "story load",
            Operation::Image => "image",
            Operation::Export => "export",
        };
        f.write_str(name)
    }
}

/// The most recently generated, not-yet-saved story
///
/// Exactly one may exist at a time; replaced wholesale by each new
/// generation and cleared by reset or a successful save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveGeneration {
    pub text: String,
    pub title_draft: String,
}

impl ActiveGeneration {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title_draft: String::new(),
        }
    }
}

/// Derived artifacts scoped to the current displayed story.
///
/// Cleared whenever the displayed story changes; an artifact is never
/// presented against a story other than the one it was derived from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    pub image: Option<ArtifactRef>,
    pub pdf: Option<ArtifactRef>,
}

impl ArtifactSet {
    pub fn clear(&mut self) {
        self.image = None;
        self.pdf = None;
    }
}

/// Derive the image prompt from story content: the first
/// IMAGE_PROMPT_TOKENS whitespace-delimited tokens joined by single spaces.
/// Shorter content yields the whole content, single-space joined.
pub fn image_prompt(content: &str) -> String {
    content
        .split_whitespace()
        .take(IMAGE_PROMPT_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}
