//! Test fixtures and data for controller tests

use shared::{StoryId, StoryRecord, StorySummary};

/// Standard test data used across the test suites
pub struct TestFixtures;

impl TestFixtures {
    pub const USERNAME: &'static str = "mira";
    pub const PASSWORD: &'static str = "hunter2";
    pub const TOKEN: &'static str = "test-bearer-token";

    pub const SCENE: &'static str = "forest";
    pub const SCENARIO: &'static str = "quest";

    /// Catalog entry with the given id and title
    pub fn summary(id: u64, title: &str) -> StorySummary {
        StorySummary {
            id: StoryId::new(id),
            title: title.to_string(),
        }
    }

    /// Full story record with the given id, title, and content
    pub fn record(id: u64, title: &str, content: &str) -> StoryRecord {
        StoryRecord {
            id: StoryId::new(id),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Story content with more than ten whitespace-delimited tokens
    pub fn long_content() -> String {
        "The fox crossed the river before dawn and met the heron by the reeds".to_string()
    }

    /// First ten tokens of `long_content`, single-space joined
    pub fn long_content_prompt() -> String {
        "The fox crossed the river before dawn and met the".to_string()
    }
}
