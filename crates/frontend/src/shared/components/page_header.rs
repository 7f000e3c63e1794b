use leptos::prelude::*;

/// Article header: title, optional italic subtitle and an accent bar
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Optional subtitle
    #[prop(into)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{move || title.get()}</h1>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
            <div class="page-header__accent" />
        </div>
    }
}
