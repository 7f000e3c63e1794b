//! Sidebar with one entry per assessment model and the synthesis entry last

use crate::layout::SelectionStore;
use crate::shared::components::ui::Badge;
use contracts::Topic;
use leptos::prelude::*;

/// Sidebar label for the synthesis entry; its article title may differ.
const SYNTHESIS_LABEL: &str = "Why These Approaches Work";

#[component]
pub fn Sidebar(store: SelectionStore) -> impl IntoView {
    let models = store
        .topics
        .models()
        .iter()
        .copied()
        .map(|topic| {
            view! { <SidebarItem store=store topic=topic label=topic.short_title() /> }
        })
        .collect_view();

    let synthesis = store.topics.synthesis();

    view! {
        <div class="sidebar">
            <div class="sidebar__header">
                <h1 class="sidebar__title">"Assessment Models"</h1>
                <p class="sidebar__subtitle">"AI-Supported Approaches for Abnormal Psychology"</p>
            </div>

            <nav class="sidebar__nav">
                {models}

                <div class="sidebar__divider" />

                <SidebarItem store=store topic=synthesis label=SYNTHESIS_LABEL />
            </nav>
        </div>
    }
}

#[component]
fn SidebarItem(store: SelectionStore, topic: &'static Topic, label: &'static str) -> impl IntoView {
    let id = topic.id;
    let accent = topic.number.is_synthesis();
    let is_active = move || store.is_active(id);

    let item_class = move || {
        let mut class = String::from("sidebar__item");
        if accent {
            class.push_str(" sidebar__item--accent");
        }
        if is_active() {
            class.push_str(" sidebar__item--active");
        }
        class
    };

    let badge_variant = move || {
        if is_active() {
            "inverse".to_string()
        } else if accent {
            "accent".to_string()
        } else {
            "neutral".to_string()
        }
    };

    view! {
        <button class=item_class on:click=move |_| store.select_topic(id)>
            <Badge variant=Signal::derive(badge_variant) class="sidebar__badge">
                {topic.number.label()}
            </Badge>
            <span class="sidebar__label">{label}</span>
            <Show when=is_active>
                <span class="sidebar__chevron" aria-hidden="true">"›"</span>
            </Show>
        </button>
    }
}
