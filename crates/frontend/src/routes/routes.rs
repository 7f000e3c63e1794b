use crate::pages::landing::LandingPage;
use crate::pages::models::ModelsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Two top-level views: the landing page and the topic browser.
/// Unknown paths fall back to the landing page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <LandingPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/models") view=ModelsPage />
            </Routes>
        </Router>
    }
}
