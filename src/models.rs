//! Core data models used throughout the portfolio engine.
//!
//! These types represent the normalized searchable items produced by the
//! index builder and the chat messages that make up a conversation
//! transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The source collection a searchable item was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Project,
    Skill,
    #[serde(rename = "blog")]
    BlogPost,
    Certification,
}

/// Normalized, query-matchable projection of one source content record.
///
/// Items are recomputed from the live content repository on every query and
/// carry no identity of their own beyond the source record's.
#[derive(Debug, Clone, Serialize)]
pub struct SearchableItem {
    pub id: String,
    pub title: String,
    pub item_type: ItemType,
    pub content: String,
    pub tags: Vec<String>,
    /// Either an in-page anchor (`#projects`) or a navigable path
    /// (`/blog/{slug}`).
    pub target_ref: String,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn in a chat transcript. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
