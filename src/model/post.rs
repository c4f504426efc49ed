use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user mentioned in a post. Not validated against actual user existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub user_id: String,
    pub username: String,
}

/// A post in the feed. Immutable once created; `posted_time` is assigned by
/// the server at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub description: String,
    pub image_url: String,
    pub user_id: String,

    pub posted_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

impl Post {
    pub fn new(
        description: String,
        image_url: String,
        user_id: String,
        mentions: Vec<Mention>,
    ) -> Self {
        Self {
            description,
            image_url,
            user_id,
            posted_time: Utc::now(),
            mentions,
        }
    }
}
