use crate::layout::SelectionStore;
use crate::shared::components::{CalloutCard, PageHeader};
use contracts::{Section, Topic};
use leptos::prelude::*;

/// Stagger between consecutive callout cards.
const CALLOUT_DELAY_STEP_MS: u32 = 80;

/// The resolved topic: header followed by its sections in order.
#[component]
pub fn TopicArticle(store: SelectionStore) -> impl IntoView {
    let title = Signal::derive(move || store.active_topic().title.to_string());
    let subtitle = Signal::derive(move || store.active_topic().subtitle.map(str::to_string));

    view! {
        <article class="article">
            <PageHeader title=title subtitle=subtitle />
            <div class="article__sections">
                {move || render_sections(store.active_topic())}
            </div>
        </article>
    }
}

fn render_sections(topic: &'static Topic) -> AnyView {
    log::debug!("render topic '{}' ({} sections)", topic.id, topic.sections.len());
    let last = topic.sections.len().saturating_sub(1);
    let mut callouts = 0u32;

    topic
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if section.is_callout {
                let delay_ms = callouts * CALLOUT_DELAY_STEP_MS;
                callouts += 1;
                view! {
                    <section class="article__section">
                        <CalloutCard heading=section.heading delay_ms=delay_ms>
                            <Paragraphs section=section />
                        </CalloutCard>
                    </section>
                }
                .into_any()
            } else {
                view! {
                    <section class="article__section">
                        <h3 class="article__heading">{section.heading}</h3>
                        <Paragraphs section=section />
                        {(index < last).then(|| view! { <div class="article__divider" /> })}
                    </section>
                }
                .into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn Paragraphs(section: &'static Section) -> impl IntoView {
    view! {
        <div class="article__paragraphs">
            {section
                .content
                .iter()
                .map(|paragraph| view! { <p class="article__paragraph">{*paragraph}</p> })
                .collect_view()}
        </div>
    }
}
