//! Core content types: topics and their sections

/// Badge shown next to a topic in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicNumber {
    /// Assessment model, numbered from 1
    Ordinal(u8),
    /// The closing synthesis article
    Synthesis,
}

impl TopicNumber {
    pub fn label(&self) -> String {
        match self {
            Self::Ordinal(n) => n.to_string(),
            Self::Synthesis => "★".to_string(),
        }
    }

    pub fn is_synthesis(&self) -> bool {
        matches!(self, Self::Synthesis)
    }
}

/// One navigable article (an assessment model or the synthesis)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub number: TopicNumber,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub sections: &'static [Section],
}

impl Topic {
    /// Title as shown in the sidebar: everything before the first colon.
    pub fn short_title(&self) -> &'static str {
        self.title
            .split_once(':')
            .map(|(head, _)| head)
            .unwrap_or(self.title)
            .trim()
    }
}

/// Titled block of paragraphs inside a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub content: &'static [&'static str],
    pub is_callout: bool,
}
