//! Tab selection state for the topic viewer
//!
//! `TabSelection` holds the active topic id and nothing else. It never errors:
//! an id that is not in the list resolves to the first topic, and moving past
//! either end of the list is ignored.

use crate::content::{Topic, TopicList};
use std::fmt;

/// Topic shown when a viewing session starts.
pub const DEFAULT_TOPIC_ID: &str = "case-formulation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    active_id: String,
}

impl Default for TabSelection {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC_ID)
    }
}

impl TabSelection {
    pub fn new(active_id: impl Into<String>) -> Self {
        Self {
            active_id: active_id.into(),
        }
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Sets the active id as given. Existence is only checked on resolve.
    pub fn select_topic(&mut self, id: impl Into<String>) {
        self.active_id = id.into();
    }

    pub fn resolve_active(&self, topics: &TopicList) -> &'static Topic {
        topics.find(&self.active_id).unwrap_or_else(|| topics.first())
    }

    /// Exact match against the raw active id, used for highlighting.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id == id
    }

    pub fn select_previous(&mut self, topics: &TopicList) {
        if let Some(index) = self.resolved_index(topics) {
            if index > 0 {
                if let Some(prev) = topics.get(index - 1) {
                    self.active_id = prev.id.to_string();
                }
            }
        }
    }

    pub fn select_next(&mut self, topics: &TopicList) {
        if let Some(index) = self.resolved_index(topics) {
            if index + 1 < topics.len() {
                if let Some(next) = topics.get(index + 1) {
                    self.active_id = next.id.to_string();
                }
            }
        }
    }

    pub fn has_previous(&self, topics: &TopicList) -> bool {
        matches!(self.resolved_index(topics), Some(index) if index > 0)
    }

    pub fn has_next(&self, topics: &TopicList) -> bool {
        matches!(self.resolved_index(topics), Some(index) if index + 1 < topics.len())
    }

    pub fn position_label(&self, topics: &TopicList) -> PositionLabel {
        let current = self.resolved_index(topics).map(|index| index + 1).unwrap_or(0);
        PositionLabel {
            current,
            total: topics.len(),
        }
    }

    // None only if the resolved topic has no exact position in the list.
    fn resolved_index(&self, topics: &TopicList) -> Option<usize> {
        let resolved = self.resolve_active(topics);
        topics.position(resolved.id)
    }
}

/// 1-based position of the active topic and the list length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionLabel {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}
