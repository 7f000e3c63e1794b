use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Entry view with a single call to action leading to the topic browser.
#[component]
pub fn LandingPage() -> impl IntoView {
    // The router's navigate closure is not Send; thaw callbacks require it.
    let navigate = StoredValue::new_local(use_navigate());

    view! {
        <div class="landing">
            <div class="landing__content">
                <div class="landing__accent" />

                <h1 class="landing__title">"AI Use in Authentic Assessment"</h1>

                <div class="landing__divider" />

                <p class="landing__question">"How is AI impacting your discipline today?"</p>
                <p class="landing__lead">
                    "Explore six pedagogically grounded approaches to AI-supported assessment that address the core challenges of teaching with artificial intelligence: student retention, academic integrity, and scalability."
                </p>

                <div class="landing__cta">
                    <Button
                        class="landing__cta-button"
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Large
                        on_click=move |_| {
                            log::info!("navigating to /models");
                            navigate.with_value(|navigate| navigate("/models", Default::default()));
                        }
                    >
                        "Explore Assessment Models"
                        <span class="landing__cta-arrow" aria-hidden="true">"→"</span>
                    </Button>
                </div>
            </div>

            <div class="landing__dots" aria-hidden="true">
                <span class="landing__dot landing__dot--primary" />
                <span class="landing__dot landing__dot--accent" />
                <span class="landing__dot landing__dot--primary" />
            </div>
        </div>
    }
}
