//! Content store for the assessment models viewer
//!
//! The topics are compiled into the binary from `content/topics.json` by the
//! build script. All types use 'static lifetimes so the whole table lives in
//! read-only memory and is never mutated after load.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::content::TopicList;
//!
//! let topics = TopicList::builtin();
//! for topic in topics.iter() {
//!     println!("{} {}", topic.number.label(), topic.short_title());
//! }
//! ```

mod topic_list;
mod types;

pub use topic_list::{ContentError, TopicList};
pub use types::{Section, Topic, TopicNumber};

mod generated {
    use super::types::{Section, Topic, TopicNumber};

    include!(concat!(env!("OUT_DIR"), "/content_gen.rs"));
}

pub use generated::{MODELS, SYNTHESIS};
