//! Story generation and persistence payloads

use serde::{Deserialize, Serialize};

use crate::types::{Roster, StoryId, StorySummary};

/// Body of a story generation request
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateRequest {
    pub characters: Roster,
    pub scene: String,
    pub scenario: String,
}

/// Generated story text
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenerateResponse {
    pub story: String,
}

/// Body of a save request for the active generation
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveRequest {
    pub title: String,
    pub content: String,
}

/// Remote-assigned id of the newly persisted story
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveResponse {
    pub id: StoryId,
}

/// Full catalog snapshot; always replaces the local list wholesale
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListStoriesResponse {
    pub stories: Vec<StorySummary>,
}
