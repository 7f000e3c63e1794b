use crate::layout::SelectionStore;
use leptos::prelude::*;
use thaw::*;

/// Previous / next controls under an article with the "n of total" label.
///
/// Buttons are disabled exactly when the corresponding move would be a no-op.
#[component]
pub fn TopicPager(store: SelectionStore) -> impl IntoView {
    view! {
        <div class="topic-pager">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| store.select_previous()
                disabled=move || !store.has_previous()
            >
                "← Previous"
            </Button>
            <span class="topic-pager__info">
                {move || store.position_label().to_string()}
            </span>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| store.select_next()
                disabled=move || !store.has_next()
            >
                "Next →"
            </Button>
        </div>
    }
}
