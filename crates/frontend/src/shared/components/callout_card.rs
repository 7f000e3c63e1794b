//! CalloutCard — Thaw Card with an accent border and a fade-in animation.
//!
//! The `callout-appear` keyframes live in `style/app.css`.

use leptos::prelude::*;
use thaw::Card;

/// Highlighted card for callout sections of an article.
#[component]
pub fn CalloutCard(
    /// Card heading
    #[prop(into)]
    heading: String,
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: callout-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class="callout">
            <Card attr:style=style>
                <h3 class="callout__heading">{heading}</h3>
                <div class="callout__body">
                    {children()}
                </div>
            </Card>
        </div>
    }
}
