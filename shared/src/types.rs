//! Core domain types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a persisted story, assigned by the remote service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(u64);

impl StoryId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque bearer credential returned by a successful login
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// The closed set of emotion dimensions a character carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionKind {
    Happiness,
    Sadness,
    Fear,
    Disgust,
    Anger,
    Surprise,
}

impl EmotionKind {
    /// Every dimension, in display order
    pub const ALL: [EmotionKind; 6] = [
        EmotionKind::Happiness,
        EmotionKind::Sadness,
        EmotionKind::Fear,
        EmotionKind::Disgust,
        EmotionKind::Anger,
        EmotionKind::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionKind::Happiness => "happiness",
            EmotionKind::Sadness => "sadness",
            EmotionKind::Fear => "fear",
            EmotionKind::Disgust => "disgust",
            EmotionKind::Anger => "anger",
            EmotionKind::Surprise => "surprise",
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happiness" => Ok(EmotionKind::Happiness),
            "sadness" => Ok(EmotionKind::Sadness),
            "fear" => Ok(EmotionKind::Fear),
            "disgust" => Ok(EmotionKind::Disgust),
            "anger" => Ok(EmotionKind::Anger),
            "surprise" => Ok(EmotionKind::Surprise),
            other => Err(format!("unknown emotion: {other}")),
        }
    }
}

/// Six-dimensional intensity profile attached to a character
///
/// All six keys are always present and every intensity lies in
/// [0, MAX_INTENSITY]. Fields are private so the range invariant cannot be
/// bypassed; the wire representation is the flat six-key object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionVector {
    happiness: u8,
    sadness: u8,
    fear: u8,
    disgust: u8,
    anger: u8,
    surprise: u8,
}

impl EmotionVector {
    pub const MAX_INTENSITY: u8 = 100;

    pub fn get(&self, kind: EmotionKind) -> u8 {
        match kind {
            EmotionKind::Happiness => self.happiness,
            EmotionKind::Sadness => self.sadness,
            EmotionKind::Fear => self.fear,
            EmotionKind::Disgust => self.disgust,
            EmotionKind::Anger => self.anger,
            EmotionKind::Surprise => self.surprise,
        }
    }

    /// Set one dimension, clamping above MAX_INTENSITY
    pub fn set(&mut self, kind: EmotionKind, intensity: u8) {
        let intensity = intensity.min(Self::MAX_INTENSITY);
        match kind {
            EmotionKind::Happiness => self.happiness = intensity,
            EmotionKind::Sadness => self.sadness = intensity,
            EmotionKind::Fear => self.fear = intensity,
            EmotionKind::Disgust => self.disgust = intensity,
            EmotionKind::Anger => self.anger = intensity,
            EmotionKind::Surprise => self.surprise = intensity,
        }
    }
}

/// One member of the roster: a name and its emotion profile
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub emotions: EmotionVector,
}

impl Character {
    /// Blank character with a zeroed emotion vector
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether the name is non-empty after trimming
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Ordered, mutable collection of characters for one story request
///
/// Invariant: never empty. Removal of the sole remaining character is a
/// no-op, so a roster always has at least one entry to edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Character>);

impl Default for Roster {
    fn default() -> Self {
        Self(vec![Character::blank()])
    }
}

impl Roster {
    /// Roster with a single blank character
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.0.get_mut(index)
    }

    /// Append a blank character, returning its index
    pub fn add(&mut self) -> usize {
        self.0.push(Character::blank());
        self.0.len() - 1
    }

    /// Remove the character at `index`, preserving the order of the rest.
    ///
    /// Returns false without mutating when the index is out of range or the
    /// removal would empty the roster.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.0.len() <= 1 || index >= self.0.len() {
            return false;
        }
        self.0.remove(index);
        true
    }

    /// Whether at least one character has a non-empty trimmed name
    pub fn has_named_character(&self) -> bool {
        self.0.iter().any(Character::is_named)
    }
}

/// Catalog entry: the (id, title) pair of a persisted story
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySummary {
    pub id: StoryId,
    pub title: String,
}

/// Full persisted story as returned by the remote service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: StoryId,
    pub title: String,
    pub content: String,
}

/// Reference to a remotely stored derived artifact (image or PDF)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
