//! Navigation Bar
//!
//! One link per page; the active page is highlighted.

use leptos::prelude::*;

use crate::routes::Page;

#[component]
pub fn NavBar(
    current_page: ReadSignal<Page>,
    #[prop(into)] on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <nav class="site-nav">
            {Page::ALL.into_iter().map(|page| {
                view! {
                    <a
                        href=page.hash()
                        class=move || if current_page.get() == page { "nav-link active" } else { "nav-link" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_navigate.run(page);
                        }
                    >
                        {page.nav_label()}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
