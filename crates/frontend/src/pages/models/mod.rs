mod article;

use crate::layout::left::Sidebar;
use crate::layout::{SelectionStore, Shell};
use crate::shared::components::TopicPager;
use article::TopicArticle;
use contracts::TopicList;
use leptos::prelude::*;

/// Topic browser: sidebar on the left, active article and pager in the center.
///
/// The selection is owned here and passed down explicitly.
#[component]
pub fn ModelsPage() -> impl IntoView {
    let topics = TopicList::builtin();
    if let Err(e) = topics.validate() {
        log::error!("topic table is inconsistent: {}", e);
    }

    let store = SelectionStore::new(topics);
    store.init_url_integration();

    let scroll_ref = NodeRef::<leptos::html::Main>::new();

    // Each newly selected topic starts at the top of the article.
    Effect::new(move |_| {
        store.selection.track();
        if let Some(el) = scroll_ref.get_untracked() {
            el.set_scroll_top(0);
        }
    });

    view! {
        <Shell
            left=move || view! { <Sidebar store=store /> }.into_any()
            center=move || {
                view! {
                    <main class="article-scroll" node_ref=scroll_ref>
                        <div class="article-container">
                            <TopicArticle store=store />
                            <TopicPager store=store />
                        </div>
                    </main>
                }
                    .into_any()
            }
        />
    }
}
