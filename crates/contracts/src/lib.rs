pub mod content;
pub mod selection;

pub use content::{ContentError, Section, Topic, TopicList, TopicNumber};
pub use selection::{PositionLabel, TabSelection, DEFAULT_TOPIC_ID};
