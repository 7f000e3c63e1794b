use super::generated::{MODELS, SYNTHESIS};
use super::types::{Topic, TopicNumber};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use thiserror::Error;

/// Problems detected in a topic table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("at least one model topic is required")]
    NoModels,
    #[error("topic '{title}' has an empty id")]
    EmptyId { title: String },
    #[error("duplicate topic id '{0}'")]
    DuplicateId(String),
    #[error("model topic '{0}' carries the synthesis badge")]
    MisplacedSynthesis(String),
    #[error("synthesis topic '{0}' must not have a number")]
    SynthesisNumbered(String),
}

/// Ordered topic table: the models in fixed order followed by the synthesis.
///
/// The order defines previous/next adjacency and the "n of total" label.
/// The list is never empty since the synthesis entry is always appended.
#[derive(Debug, Clone)]
pub struct TopicList {
    topics: Vec<&'static Topic>,
    model_count: usize,
}

static BUILTIN: OnceCell<TopicList> = OnceCell::new();

impl TopicList {
    pub fn new(models: &'static [Topic], synthesis: &'static Topic) -> Self {
        let mut topics: Vec<&'static Topic> = models.iter().collect();
        topics.push(synthesis);
        Self {
            topics,
            model_count: models.len(),
        }
    }

    /// The table compiled from `content/topics.json`.
    pub fn builtin() -> &'static TopicList {
        BUILTIN.get_or_init(|| TopicList::new(MODELS, &SYNTHESIS))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Topic> {
        self.topics.get(index).copied()
    }

    pub fn first(&self) -> &'static Topic {
        self.topics[0]
    }

    pub fn last(&self) -> &'static Topic {
        self.topics[self.topics.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Topic> + '_ {
        self.topics.iter().copied()
    }

    pub fn models(&self) -> &[&'static Topic] {
        &self.topics[..self.model_count]
    }

    pub fn synthesis(&self) -> &'static Topic {
        self.last()
    }

    /// Index of the topic whose id matches exactly.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|topic| topic.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&'static Topic> {
        self.position(id).map(|index| self.topics[index])
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.model_count == 0 {
            return Err(ContentError::NoModels);
        }

        let mut seen = HashSet::new();
        for topic in self.iter() {
            if topic.id.trim().is_empty() {
                return Err(ContentError::EmptyId {
                    title: topic.title.to_string(),
                });
            }
            if !seen.insert(topic.id) {
                return Err(ContentError::DuplicateId(topic.id.to_string()));
            }
        }

        if let Some(model) = self
            .models()
            .iter()
            .find(|topic| topic.number == TopicNumber::Synthesis)
        {
            return Err(ContentError::MisplacedSynthesis(model.id.to_string()));
        }

        let synthesis = self.synthesis();
        if !synthesis.number.is_synthesis() {
            return Err(ContentError::SynthesisNumbered(synthesis.id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MODELS_XY: [Topic; 2] = [
        Topic {
            id: "x",
            number: TopicNumber::Ordinal(1),
            title: "Model X: First",
            subtitle: None,
            sections: &[],
        },
        Topic {
            id: "y",
            number: TopicNumber::Ordinal(2),
            title: "Model Y",
            subtitle: Some("second"),
            sections: &[],
        },
    ];

    static SYNTH: Topic = Topic {
        id: "synthesis",
        number: TopicNumber::Synthesis,
        title: "Synthesis",
        subtitle: None,
        sections: &[],
    };

    static DUPLICATES: [Topic; 2] = [
        Topic {
            id: "x",
            number: TopicNumber::Ordinal(1),
            title: "X",
            subtitle: None,
            sections: &[],
        },
        Topic {
            id: "x",
            number: TopicNumber::Ordinal(2),
            title: "X again",
            subtitle: None,
            sections: &[],
        },
    ];

    static NUMBERED_SYNTH: Topic = Topic {
        id: "synthesis",
        number: TopicNumber::Ordinal(7),
        title: "Synthesis",
        subtitle: None,
        sections: &[],
    };

    static BLANK_ID: [Topic; 1] = [Topic {
        id: "  ",
        number: TopicNumber::Ordinal(1),
        title: "Untitled Model",
        subtitle: None,
        sections: &[],
    }];

    static STARRED_MODEL: [Topic; 2] = [
        Topic {
            id: "x",
            number: TopicNumber::Ordinal(1),
            title: "X",
            subtitle: None,
            sections: &[],
        },
        Topic {
            id: "starred",
            number: TopicNumber::Synthesis,
            title: "Starred",
            subtitle: None,
            sections: &[],
        },
    ];

    #[test]
    fn test_synthesis_is_appended_last() {
        let list = TopicList::new(&MODELS_XY, &SYNTH);
        assert_eq!(list.len(), 3);
        assert_eq!(list.first().id, "x");
        assert_eq!(list.last().id, "synthesis");
        assert_eq!(list.models().len(), 2);
        assert_eq!(list.synthesis().id, "synthesis");
    }

    #[test]
    fn test_position_and_find() {
        let list = TopicList::new(&MODELS_XY, &SYNTH);
        assert_eq!(list.position("y"), Some(1));
        assert_eq!(list.position("missing"), None);
        assert_eq!(list.find("synthesis").map(|t| t.title), Some("Synthesis"));
        assert!(list.find("").is_none());
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let list = TopicList::new(&DUPLICATES, &SYNTH);
        assert_eq!(
            list.validate(),
            Err(ContentError::DuplicateId("x".to_string()))
        );
    }

    #[test]
    fn test_validate_requires_models() {
        let list = TopicList::new(&[], &SYNTH);
        assert_eq!(list.len(), 1);
        assert_eq!(list.validate(), Err(ContentError::NoModels));
    }

    #[test]
    fn test_validate_rejects_numbered_synthesis() {
        let list = TopicList::new(&MODELS_XY, &NUMBERED_SYNTH);
        assert_eq!(
            list.validate(),
            Err(ContentError::SynthesisNumbered("synthesis".to_string()))
        );
        assert_eq!(list.synthesis().number.label(), "7");
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let list = TopicList::new(&BLANK_ID, &SYNTH);
        assert_eq!(
            list.validate(),
            Err(ContentError::EmptyId {
                title: "Untitled Model".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_starred_model() {
        let list = TopicList::new(&STARRED_MODEL, &SYNTH);
        assert_eq!(
            list.validate(),
            Err(ContentError::MisplacedSynthesis("starred".to_string()))
        );
    }

    #[test]
    fn test_builtin_content() {
        let list = TopicList::builtin();
        assert!(list.validate().is_ok());
        assert_eq!(list.first().id, "case-formulation");
        assert!(list.last().number.is_synthesis());
        assert_eq!(list.len(), list.models().len() + 1);
        assert!(list.iter().all(|topic| !topic.sections.is_empty()));
    }
}
