use leptos::prelude::*;

/// Round badge used for topic numbers in the sidebar
#[component]
pub fn Badge(
    /// Badge variant: "inverse", "accent", or anything else for neutral
    #[prop(into)]
    variant: Signal<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_str() {
        "inverse" => "badge--inverse",
        "accent" => "badge--accent",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
