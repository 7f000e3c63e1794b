pub mod center;
pub mod left;
pub mod selection_store;

pub use selection_store::SelectionStore;

use leptos::prelude::*;

/// Two-pane shell of the topic browser.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |    Article + navigation      |
/// |   (Left)  |         (Center)             |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <center::Center>
                    {center()}
                </center::Center>
            </div>
        </div>
    }
}
