use contracts::{PositionLabel, Section, TabSelection, Topic, TopicList, TopicNumber};

static MODELS: [Topic; 2] = [
    Topic {
        id: "x",
        number: TopicNumber::Ordinal(1),
        title: "Model A: Critique",
        subtitle: Some("first model"),
        sections: &[Section {
            heading: "The Assessment",
            content: &["Students critique a draft."],
            is_callout: false,
        }],
    },
    Topic {
        id: "y",
        number: TopicNumber::Ordinal(2),
        title: "Model B",
        subtitle: None,
        sections: &[],
    },
];

static SYNTHESIS: Topic = Topic {
    id: "synthesis",
    number: TopicNumber::Synthesis,
    title: "Why These Approaches Work",
    subtitle: None,
    sections: &[Section {
        heading: "The Common Thread",
        content: &["Question the tool."],
        is_callout: true,
    }],
};

fn label(current: usize, total: usize) -> PositionLabel {
    PositionLabel { current, total }
}

#[test]
fn walk_forward_and_back_from_missing_default() {
    let topics = TopicList::new(&MODELS, &SYNTHESIS);
    let mut selection = TabSelection::default();

    assert_eq!(selection.active_id(), "case-formulation");
    assert_eq!(selection.resolve_active(&topics).id, "x");

    selection.select_next(&topics);
    assert_eq!(selection.resolve_active(&topics).id, "y");
    assert_eq!(selection.position_label(&topics), label(2, 3));

    selection.select_next(&topics);
    assert_eq!(selection.resolve_active(&topics).id, "synthesis");
    assert_eq!(selection.position_label(&topics), label(3, 3));

    selection.select_next(&topics);
    assert_eq!(selection.resolve_active(&topics).id, "synthesis");
    assert_eq!(selection.position_label(&topics), label(3, 3));

    selection.select_previous(&topics);
    selection.select_previous(&topics);
    assert_eq!(selection.resolve_active(&topics).id, "x");
    assert_eq!(selection.position_label(&topics), label(1, 3));
}

#[test]
fn builtin_content_walks_end_to_end() {
    let topics = TopicList::builtin();
    let total = topics.len();
    let mut selection = TabSelection::default();

    assert_eq!(selection.position_label(topics), label(1, total));
    for _ in 1..total {
        selection.select_next(topics);
    }
    assert_eq!(selection.resolve_active(topics).id, topics.synthesis().id);
    assert_eq!(selection.position_label(topics), label(total, total));

    selection.select_next(topics);
    assert_eq!(selection.position_label(topics), label(total, total));
}

#[test]
fn sidebar_selection_jumps_directly() {
    let topics = TopicList::builtin();
    let mut selection = TabSelection::default();

    selection.select_topic("synthesis");
    assert!(selection.is_active("synthesis"));
    assert!(selection.has_previous(topics));
    assert!(!selection.has_next(topics));

    selection.select_topic("case-formulation");
    assert!(!selection.has_previous(topics));
    assert_eq!(selection.resolve_active(topics).short_title(), "Case Formulation Critique");
}
