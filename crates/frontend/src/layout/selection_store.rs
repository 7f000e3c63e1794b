use contracts::{PositionLabel, TabSelection, Topic, TopicList};
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter carrying the active topic id (`/models?active=...`).
const ACTIVE_PARAM: &str = "active";

/// Reactive wrapper around the topic selection of one viewing session.
///
/// Created by the models page and handed to its children as a prop; it is
/// deliberately not provided through context.
#[derive(Clone, Copy)]
pub struct SelectionStore {
    pub selection: RwSignal<TabSelection>,
    pub topics: &'static TopicList,
}

impl SelectionStore {
    pub fn new(topics: &'static TopicList) -> Self {
        Self {
            selection: RwSignal::new(TabSelection::default()),
            topics,
        }
    }

    pub fn active_topic(&self) -> &'static Topic {
        let topics = self.topics;
        self.selection.with(|s| s.resolve_active(topics))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.selection.with(|s| s.is_active(id))
    }

    pub fn has_previous(&self) -> bool {
        let topics = self.topics;
        self.selection.with(|s| s.has_previous(topics))
    }

    pub fn has_next(&self) -> bool {
        let topics = self.topics;
        self.selection.with(|s| s.has_next(topics))
    }

    pub fn position_label(&self) -> PositionLabel {
        let topics = self.topics;
        self.selection.with(|s| s.position_label(topics))
    }

    pub fn select_topic(&self, id: &str) {
        log::debug!("select_topic: id='{}'", id);
        self.selection.update(|s| s.select_topic(id));
    }

    pub fn select_previous(&self) {
        let topics = self.topics;
        self.selection.update(|s| s.select_previous(topics));
        log::debug!("select_previous: now '{}'", self.active_id_untracked());
    }

    pub fn select_next(&self) {
        let topics = self.topics;
        self.selection.update(|s| s.select_next(topics));
        log::debug!("select_next: now '{}'", self.active_id_untracked());
    }

    fn active_id_untracked(&self) -> String {
        self.selection.with_untracked(|s| s.active_id().to_string())
    }

    /// Seeds the selection from `?active=` and keeps the query string in
    /// sync with later changes. Unknown ids are accepted and resolve to the
    /// first topic like any other selection.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_id) = active_from_search(&search) {
            log::info!("deep link to topic '{}'", active_id);
            self.select_topic(&active_id);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_id = this.selection.with(|s| s.active_id().to_string());
            let query_string = serde_qs::to_string(&HashMap::from([(
                ACTIVE_PARAM.to_string(),
                active_id,
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Active topic id from a `location.search` string, with or without the
/// leading `?`. A query that does not parse yields no deep link.
fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).cloned()
}
